//! One project looked up by its route id.

use showcase_client::ProjectSource;
use showcase_core::{CommentBoard, DeveloperProfile, Error, ImageCursor, Project, Result};

use crate::fetch::{Loadable, fetch_catalog};
use crate::options::DetailOptions;
use crate::project_view::ProjectView;

/// Shown while fetching.
pub const LOADING_PROJECT: &str = "Loading project...";

/// Shown when no project matches the route.
pub const NOT_FOUND: &str = "Project not found.";

/// A found project with its interaction state.
#[derive(Debug, Clone, PartialEq)]
struct Found {
    project: Project,
    cursor: ImageCursor,
    board: Option<CommentBoard>,
}

/// The detail screen.
///
/// After mounting it is either showing a project or in the not-found
/// state. The comment board exists only while a project is shown and
/// [`DetailOptions::comments`] is set; comment operations otherwise fail
/// with [`Error::CommentsDisabled`].
#[derive(Debug, Clone, PartialEq)]
pub struct DetailScreen {
    route: String,
    options: DetailOptions,
    developer: Option<DeveloperProfile>,
    found: Loadable<Option<Found>>,
}

impl DetailScreen {
    /// A screen for `route` that has not fetched yet.
    pub fn new(route: impl Into<String>, options: DetailOptions) -> Self {
        Self {
            route: route.into(),
            options,
            developer: None,
            found: Loadable::Loading,
        }
    }

    /// Same screen with an "About Developer" block under the full layout.
    #[must_use]
    pub fn with_developer(self, developer: DeveloperProfile) -> Self {
        Self {
            developer: Some(developer),
            ..self
        }
    }

    /// Fetches once and keeps the first project matching the route.
    pub async fn mount<S>(&self, source: &S) -> Self
    where
        S: ProjectSource + ?Sized,
    {
        let catalog = fetch_catalog(source).await;
        let found = catalog
            .find(&self.route, self.options.matching)
            .cloned()
            .map(|project| Found {
                cursor: ImageCursor::for_project(&project),
                board: self.options.comments.then(CommentBoard::new),
                project,
            });

        match &found {
            Some(f) => tracing::info!(
                route = %self.route,
                name = %f.project.name,
                "Project loaded"
            ),
            None => tracing::warn!(
                route = %self.route,
                matching = %self.options.matching,
                "Project not found"
            ),
        }

        Self {
            found: Loadable::Loaded(found),
            ..self.clone()
        }
    }

    /// The route parameter this screen looks up.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Layout options in use.
    pub fn options(&self) -> &DetailOptions {
        &self.options
    }

    /// Developer profile shown by the full layout, if any.
    pub fn developer(&self) -> Option<&DeveloperProfile> {
        self.developer.as_ref()
    }

    /// Returns `true` until mounted.
    pub fn is_loading(&self) -> bool {
        self.found.is_loading()
    }

    /// Returns `true` once mounted without a match.
    pub fn is_not_found(&self) -> bool {
        matches!(self.found, Loadable::Loaded(None))
    }

    /// The project being shown.
    pub fn project(&self) -> Option<&Project> {
        self.shown().map(|f| &f.project)
    }

    /// Carousel of the project being shown.
    pub fn cursor(&self) -> Option<ImageCursor> {
        self.shown().map(|f| f.cursor)
    }

    /// Comment board, when enabled and a project is shown.
    pub fn comments(&self) -> Option<&CommentBoard> {
        self.shown().and_then(|f| f.board.as_ref())
    }

    fn shown(&self) -> Option<&Found> {
        self.found.loaded().and_then(Option::as_ref)
    }

    fn with_found(&self, f: impl FnOnce(&Found) -> Result<Found>) -> Result<Self> {
        let found = match &self.found {
            Loadable::Loaded(Some(current)) => Loadable::Loaded(Some(f(current)?)),
            other => other.clone(),
        };
        Ok(Self {
            found,
            ..self.clone()
        })
    }

    fn with_board(&self, f: impl FnOnce(&CommentBoard) -> Result<CommentBoard>) -> Result<Self> {
        let board = self.comments().ok_or(Error::CommentsDisabled)?;
        let board = f(board)?;
        self.with_found(|found| {
            Ok(Found {
                board: Some(board),
                ..found.clone()
            })
        })
    }

    // ------------------------------------------------------------------------
    // Carousel
    // ------------------------------------------------------------------------

    /// Jumps to image `target` (thumbnail click).
    ///
    /// Fails with [`Error::EmptyImages`] when the project has no images and
    /// [`Error::IndexOutOfRange`] past the last one. Without a shown
    /// project this is a no-op.
    pub fn select_image(&self, target: usize) -> Result<Self> {
        self.with_found(|found| {
            if found.cursor.is_empty() {
                return Err(Error::EmptyImages {
                    project: found.project.id.to_string(),
                });
            }
            Ok(Found {
                cursor: found.cursor.jumped_to(target)?,
                ..found.clone()
            })
        })
    }

    /// Next image, wrapping around.
    #[must_use]
    pub fn next_image(&self) -> Self {
        self.move_cursor(ImageCursor::advanced)
    }

    /// Previous image, wrapping around.
    #[must_use]
    pub fn prev_image(&self) -> Self {
        self.move_cursor(ImageCursor::retreated)
    }

    fn move_cursor(&self, step: fn(&ImageCursor) -> ImageCursor) -> Self {
        let found = self.found.map(|shown| {
            shown.as_ref().map(|f| Found {
                cursor: step(&f.cursor),
                ..f.clone()
            })
        });
        Self {
            found,
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------------

    /// Replaces the draft name.
    pub fn set_name(&self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        self.with_board(|b| Ok(b.set_name(name)))
    }

    /// Replaces the draft comment text.
    pub fn set_text(&self, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        self.with_board(|b| Ok(b.set_text(text)))
    }

    /// Selects an avatar by its position in the full avatar set.
    pub fn select_avatar(&self, index: usize) -> Result<Self> {
        self.with_board(|b| b.select_avatar_at(index))
    }

    /// Shows the next avatar window.
    pub fn next_avatar_window(&self) -> Result<Self> {
        self.with_board(|b| Ok(b.next_avatar_window()))
    }

    /// Shows the previous avatar window.
    pub fn prev_avatar_window(&self) -> Result<Self> {
        self.with_board(|b| Ok(b.prev_avatar_window()))
    }

    /// Posts the draft. On a validation error `self` keeps the draft.
    pub fn submit_comment(&self) -> Result<Self> {
        self.with_board(CommentBoard::submit)
    }

    /// Text rendering of the screen.
    pub fn render(&self) -> String {
        match &self.found {
            Loadable::Loading => LOADING_PROJECT.to_string(),
            Loadable::Loaded(None) => NOT_FOUND.to_string(),
            Loadable::Loaded(Some(f)) => {
                ProjectView::new(&f.project, f.cursor).detail(
                    &self.options,
                    f.board.as_ref(),
                    self.developer.as_ref(),
                )
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use showcase_client::StaticSource;
    use showcase_core::IdMatching;
    use showcase_core::comments::{DEFAULT_AVATARS, SUBMIT_ALERT};

    fn source() -> StaticSource {
        StaticSource::new(vec![
            Project::new(1, "Numeric").with_images(["n1.png", "n2.png"]),
            Project::new("42", "Answer")
                .with_images(["a1.png", "a2.png", "a3.png"])
                .with_rating(2.0),
            Project::new("bare", "No Images"),
        ])
    }

    async fn full(route: &str) -> DetailScreen {
        DetailScreen::new(route, DetailOptions::full())
            .mount(&source())
            .await
    }

    #[test]
    fn test_loading_state() {
        let screen = DetailScreen::new("1", DetailOptions::full());
        assert!(screen.is_loading());
        assert_eq!(screen.render(), LOADING_PROJECT);
        assert!(matches!(
            screen.set_name("x").unwrap_err(),
            Error::CommentsDisabled
        ));
    }

    #[tokio::test]
    async fn test_exact_lookup() {
        let screen = full("42").await;
        assert_eq!(screen.project().unwrap().name, "Answer");
        assert!(!screen.is_not_found());
    }

    #[tokio::test]
    async fn test_exact_does_not_match_numeric_id() {
        let screen = full("1").await;
        assert!(screen.is_not_found());
        assert_eq!(screen.render(), NOT_FOUND);
    }

    #[tokio::test]
    async fn test_numeric_lookup() {
        let screen = DetailScreen::new("1", DetailOptions::compact())
            .mount(&source())
            .await;
        assert_eq!(screen.project().unwrap().name, "Numeric");
        assert!(screen.comments().is_none());
    }

    #[tokio::test]
    async fn test_canonical_lookup() {
        let options = DetailOptions::full().with_matching(IdMatching::Canonical);
        let src = source();
        for route in ["1", "42"] {
            let screen = DetailScreen::new(route, options).mount(&src).await;
            assert!(screen.project().is_some(), "route {route}");
        }
        assert_eq!(src.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let screen = full("999").await;
        assert!(screen.is_not_found());
        assert!(screen.project().is_none());
        assert_eq!(screen.next_image(), screen);
        assert_eq!(screen.select_image(0).unwrap(), screen);
    }

    #[tokio::test]
    async fn test_failed_fetch_not_found() {
        let screen = DetailScreen::new("42", DetailOptions::full())
            .mount(&StaticSource::failing("down"))
            .await;
        assert!(!screen.is_loading());
        assert!(screen.is_not_found());
    }

    #[tokio::test]
    async fn test_carousel() {
        let screen = full("42").await;
        assert_eq!(screen.prev_image().cursor().unwrap().index(), 2);
        assert_eq!(screen.next_image().cursor().unwrap().index(), 1);
        assert_eq!(screen.select_image(2).unwrap().cursor().unwrap().index(), 2);
        assert!(matches!(
            screen.select_image(3).unwrap_err(),
            Error::IndexOutOfRange { index: 3, len: 3 }
        ));
    }

    #[tokio::test]
    async fn test_empty_images() {
        let screen = full("bare").await;
        assert_eq!(screen.next_image().cursor().unwrap().index(), 0);
        assert!(matches!(
            screen.select_image(0).unwrap_err(),
            Error::EmptyImages { .. }
        ));
        assert!(screen.render().contains("[no image]"));
    }

    #[tokio::test]
    async fn test_comment_flow() {
        let screen = full("42").await;
        let ready = screen
            .set_name("Ada")
            .unwrap()
            .set_text("Great")
            .unwrap()
            .select_avatar(4)
            .unwrap();
        assert_eq!(
            ready.comments().unwrap().draft().avatar.as_deref(),
            Some(DEFAULT_AVATARS[4])
        );

        let posted = ready.submit_comment().unwrap();
        let board = posted.comments().unwrap();
        assert_eq!(board.comments().len(), 1);
        assert_eq!(board.comments()[0].name, "Ada");
        assert!(board.draft().is_empty());
        assert!(posted.render().contains("- Ada ["));
    }

    #[tokio::test]
    async fn test_incomplete_comment_rejected() {
        let screen = full("42").await.set_name("Ada").unwrap();
        let err = screen.submit_comment().unwrap_err();
        assert_eq!(err.user_message(), Some(SUBMIT_ALERT));
        assert_eq!(screen.comments().unwrap().draft().name, "Ada");
        assert!(screen.comments().unwrap().comments().is_empty());
    }

    #[tokio::test]
    async fn test_avatar_windows() {
        let screen = full("42").await;
        let next = screen.next_avatar_window().unwrap();
        assert_eq!(next.comments().unwrap().avatars().window(), 1);
        let back = next.next_avatar_window().unwrap();
        assert_eq!(back.comments().unwrap().avatars().window(), 0);
        assert_eq!(
            screen
                .prev_avatar_window()
                .unwrap()
                .comments()
                .unwrap()
                .avatars()
                .window(),
            1
        );
        assert!(screen.select_avatar(6).is_err());
    }

    #[tokio::test]
    async fn test_compact_rejects_comments() {
        let screen = DetailScreen::new("1", DetailOptions::compact())
            .mount(&source())
            .await;
        assert!(matches!(
            screen.submit_comment().unwrap_err(),
            Error::CommentsDisabled
        ));
        assert!(!screen.render().contains("Comments"));
    }

    #[tokio::test]
    async fn test_developer_survives_mount_and_updates() {
        let developer = DeveloperProfile::new("Ada").with_link("GitHub", "https://github.com/ada");
        let screen = DetailScreen::new("42", DetailOptions::full())
            .with_developer(developer.clone())
            .mount(&source())
            .await
            .next_image();
        assert_eq!(screen.developer(), Some(&developer));
        let text = screen.render();
        assert!(text.contains("About Developer"));
        assert!(text.contains("  GitHub: https://github.com/ada"));

        let compact = DetailScreen::new("1", DetailOptions::compact())
            .with_developer(developer)
            .mount(&source())
            .await;
        assert!(!compact.render().contains("About Developer"));
    }
}
