//! Text rendering of a single project, shared by every screen.

use showcase_core::rating::DEFAULT_CARD_RATING;
use showcase_core::{
    CommentBoard, DeveloperProfile, ImageCursor, Project, StarRating, Truncation,
};

use crate::options::DetailOptions;

/// Shown in place of an image when a project has none.
pub const NO_IMAGE: &str = "[no image]";

/// Route of the list screen, linked from the detail layout.
pub const BACK_ROUTE: &str = "/projects";

/// How a card shows its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRating {
    /// A row of five stars.
    Stars,
    /// A compact `3⭐` badge.
    Badge,
}

/// One project at one carousel position.
#[derive(Debug, Clone, Copy)]
pub struct ProjectView<'a> {
    project: &'a Project,
    cursor: ImageCursor,
}

impl<'a> ProjectView<'a> {
    /// View of `project` showing the image under `cursor`.
    pub fn new(project: &'a Project, cursor: ImageCursor) -> Self {
        Self { project, cursor }
    }

    /// The project being shown.
    pub fn project(&self) -> &'a Project {
        self.project
    }

    /// URL of the current image, or [`NO_IMAGE`].
    pub fn current_image(&self) -> &'a str {
        self.cursor.current(self.project).unwrap_or(NO_IMAGE)
    }

    /// Carousel position as `2/3`, or `0/0` without images.
    pub fn position(&self) -> String {
        if self.cursor.is_empty() {
            return "0/0".to_string();
        }
        format!("{}/{}", self.cursor.index() + 1, self.cursor.len())
    }

    /// Summary card used by the list and random screens.
    pub fn card(&self, rating: CardRating) -> String {
        let p = self.project;
        let stars = StarRating::from_initial(p.rating_or(DEFAULT_CARD_RATING));
        let rating = match rating {
            CardRating::Stars => stars.render(),
            CardRating::Badge => stars.badge(),
        };

        [
            format!("< {} > [{}]", self.current_image(), self.position()),
            p.name.clone(),
            Truncation::card().apply(&p.description),
            format!("Date: {}", p.date_or_placeholder()),
            format!("Rating: {rating}"),
            format!("Details: {}", p.detail_route()),
        ]
        .join("\n")
    }

    /// Full-page layout used by the detail screen.
    ///
    /// `board` is rendered only when `options.comments` is set, `developer`
    /// only when [`DetailOptions::show_link_and_date`] is.
    pub fn detail(
        &self,
        options: &DetailOptions,
        board: Option<&CommentBoard>,
        developer: Option<&DeveloperProfile>,
    ) -> String {
        let p = self.project;
        let mut lines = vec![
            p.name.clone(),
            format!("Thumbnails: {}", self.thumbnails()),
            format!("< {} > [{}]", self.current_image(), self.position()),
            options.truncation.apply(&p.description),
        ];

        if options.show_link_and_date {
            if let Some(link) = p.link.as_deref().filter(|l| !l.is_empty()) {
                lines.push(format!("Link: {link}"));
            }
            if let Some(date) = p.date.as_deref().filter(|d| !d.is_empty()) {
                lines.push(format!("Date: {date}"));
            }
        }

        lines.push(format!("Rating: {}", options.rating.resolve(p).render()));
        lines.push(format!("Back: {BACK_ROUTE}"));

        if let Some(developer) = developer.filter(|_| options.show_link_and_date) {
            lines.push(String::new());
            lines.push(render_developer(developer));
        }

        if let Some(board) = board.filter(|_| options.comments) {
            lines.push(String::new());
            lines.push(render_board(board));
        }

        lines.join("\n")
    }

    fn thumbnails(&self) -> String {
        if self.cursor.is_empty() {
            return NO_IMAGE.to_string();
        }
        (0..self.cursor.len())
            .map(|i| {
                if i == self.cursor.index() {
                    format!("[{}]", i + 1)
                } else {
                    format!(" {} ", i + 1)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// "About Developer" block: greeting and one line per contact link.
pub fn render_developer(developer: &DeveloperProfile) -> String {
    let mut lines = vec!["About Developer".to_string(), developer.greeting()];
    lines.extend(
        developer
            .links
            .iter()
            .map(|link| format!("  {}: {}", link.label, link.url)),
    );
    lines.join("\n")
}

/// Comment section: avatar window, draft, and posted comments.
pub fn render_board(board: &CommentBoard) -> String {
    let avatars = board.avatars();
    let draft = board.draft();
    let first = avatars.window() * avatars.visible();

    let mut lines = vec![
        "Comments".to_string(),
        format!(
            "Avatars (window {}/{}):",
            avatars.window() + 1,
            avatars.window_count()
        ),
    ];
    for (offset, url) in avatars.visible_avatars().iter().enumerate() {
        let mark = if draft.avatar.as_deref() == Some(url.as_str()) {
            '*'
        } else {
            ' '
        };
        lines.push(format!("  {mark}{} {url}", first + offset + 1));
    }

    lines.push(format!("Name: {}", draft.name));
    lines.push(format!("Comment: {}", draft.text));
    lines.push(format!(
        "Avatar: {}",
        draft.avatar.as_deref().unwrap_or("(none)")
    ));

    if board.comments().is_empty() {
        lines.push("No comments yet.".to_string());
    } else {
        for c in board.comments() {
            lines.push(format!("- {} [{}]: {}", c.name, c.avatar, c.text));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use showcase_core::comments::DEFAULT_AVATARS;

    fn project() -> Project {
        Project::new(7, "Weather App")
            .with_description("Shows the forecast for any city")
            .with_images(["a.png", "b.png", "c.png"])
            .with_link("https://weather.test")
            .with_date("June 2024")
            .with_rating(5.0)
    }

    #[test]
    fn test_card_contents() {
        let p = project();
        let view = ProjectView::new(&p, ImageCursor::for_project(&p).advanced());
        let card = view.card(CardRating::Stars);
        assert!(card.starts_with("< b.png > [2/3]"));
        assert!(card.contains("Weather App"));
        assert!(card.contains("Shows the forecast for any city..."));
        assert!(card.contains("Date: June 2024"));
        assert!(card.contains("Rating: ★★★★★"));
        assert!(card.contains("Details: /newprojects/7"));
    }

    #[test]
    fn test_card_defaults() {
        let p = Project::new("x", "Bare");
        let view = ProjectView::new(&p, ImageCursor::for_project(&p));
        let card = view.card(CardRating::Badge);
        assert!(card.contains(NO_IMAGE));
        assert!(card.contains("[0/0]"));
        assert!(card.contains("Date: No date provided"));
        assert!(card.contains("Rating: 3⭐"));
    }

    #[test]
    fn test_detail_full_layout() {
        let p = project();
        let view = ProjectView::new(&p, ImageCursor::for_project(&p));
        let board = CommentBoard::new();
        let text = view.detail(&DetailOptions::full(), Some(&board), None);
        assert!(text.contains("Thumbnails: [1] 2  3 "));
        assert!(text.contains("Link: https://weather.test"));
        assert!(text.contains("Date: June 2024"));
        assert!(text.contains("Rating: ★★★★★"));
        assert!(text.contains("Back: /projects"));
        assert!(text.contains("No comments yet."));
        assert!(!text.contains("About Developer"));
    }

    #[test]
    fn test_detail_full_layout_omits_missing_date() {
        let p = Project::new("x", "Undated").with_images(["a.png"]);
        let view = ProjectView::new(&p, ImageCursor::for_project(&p));
        let text = view.detail(&DetailOptions::full(), None, None);
        assert!(!text.contains("Date:"));
        assert!(!text.contains(showcase_core::types::NO_DATE_PLACEHOLDER));

        let p = p.with_date("");
        let view = ProjectView::new(&p, ImageCursor::for_project(&p));
        assert!(!view.detail(&DetailOptions::full(), None, None).contains("Date:"));
    }

    #[test]
    fn test_detail_full_layout_about_developer() {
        let p = project();
        let view = ProjectView::new(&p, ImageCursor::for_project(&p));
        let developer = DeveloperProfile::new("Ada")
            .with_brand("Lovelace Labs")
            .with_link("Email", "mailto:ada@example.com")
            .with_link("GitHub", "https://github.com/ada");
        let board = CommentBoard::new();
        let text = view.detail(&DetailOptions::full(), Some(&board), Some(&developer));

        let about = text.find("About Developer").unwrap();
        assert!(about > text.find("Back: /projects").unwrap());
        assert!(about < text.find("No comments yet.").unwrap());
        assert!(text.contains("Hello, I'm Ada, the creator of Lovelace Labs."));
        assert!(text.contains("  Email: mailto:ada@example.com\n  GitHub: https://github.com/ada"));

        // The compact layout has no developer block.
        let compact = view.detail(&DetailOptions::compact(), None, Some(&developer));
        assert!(!compact.contains("About Developer"));
    }

    #[test]
    fn test_detail_compact_layout() {
        let p = project();
        let view = ProjectView::new(&p, ImageCursor::for_project(&p));
        let text = view.detail(&DetailOptions::compact(), None, None);
        assert!(!text.contains("Link:"));
        assert!(!text.contains("Date:"));
        assert!(text.contains("Rating: ★★★★☆"));
        assert!(!text.contains("Comments"));
    }

    #[test]
    fn test_board_marks_selected_avatar() {
        let board = CommentBoard::new()
            .select_avatar(DEFAULT_AVATARS[1])
            .unwrap()
            .set_name("Ada");
        let text = render_board(&board);
        assert!(text.contains("Avatars (window 1/2):"));
        assert!(text.contains(&format!("*2 {}", DEFAULT_AVATARS[1])));
        assert!(text.contains("Name: Ada"));

        let second = render_board(&board.next_avatar_window());
        assert!(second.contains("Avatars (window 2/2):"));
        assert!(second.contains(&format!(" 5 {}", DEFAULT_AVATARS[4])));
    }
}
