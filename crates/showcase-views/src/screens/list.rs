//! Every hosted project as a card.

use showcase_client::ProjectSource;
use showcase_core::{ImageCursor, Project, Result};

use super::{CardDeck, LOADING_PROJECTS};
use crate::fetch::{Loadable, fetch_catalog};
use crate::project_view::CardRating;

/// Heading of the list screen.
pub const LIST_HEADING: &str = "Hosted Projects";

/// The list screen.
///
/// Carousel operations on a loading screen, or on an index with no card,
/// return an unchanged copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListScreen {
    deck: Loadable<CardDeck>,
}

impl ListScreen {
    /// A screen that has not fetched yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches once from `source` and shows every project in document
    /// order. A failed fetch shows an empty list.
    pub async fn mount<S>(&self, source: &S) -> Self
    where
        S: ProjectSource + ?Sized,
    {
        let catalog = fetch_catalog(source).await;
        tracing::info!(count = catalog.len(), "List screen loaded");
        Self {
            deck: Loadable::Loaded(CardDeck::new(catalog.into_projects())),
        }
    }

    /// Returns `true` until [`Self::mount`] completes.
    pub fn is_loading(&self) -> bool {
        self.deck.is_loading()
    }

    /// Loaded projects; empty while loading.
    pub fn projects(&self) -> &[Project] {
        self.deck.loaded().map(CardDeck::projects).unwrap_or_default()
    }

    /// Carousel of the card at `index`.
    pub fn cursor(&self, index: usize) -> Option<ImageCursor> {
        self.deck.loaded().and_then(|d| d.cursor(index))
    }

    /// Next image on one card.
    #[must_use]
    pub fn next_image(&self, index: usize) -> Self {
        Self {
            deck: self.deck.map(|d| d.next_image(index)),
        }
    }

    /// Previous image on one card.
    #[must_use]
    pub fn prev_image(&self, index: usize) -> Self {
        Self {
            deck: self.deck.map(|d| d.prev_image(index)),
        }
    }

    /// Jumps one card to image `target`.
    pub fn select_image(&self, index: usize, target: usize) -> Result<Self> {
        let deck = match &self.deck {
            Loadable::Loading => Loadable::Loading,
            Loadable::Loaded(d) => Loadable::Loaded(d.select_image(index, target)?),
        };
        Ok(Self { deck })
    }

    /// Text rendering of the screen.
    pub fn render(&self) -> String {
        match &self.deck {
            Loadable::Loading => LOADING_PROJECTS.to_string(),
            Loadable::Loaded(d) => d.render(LIST_HEADING, CardRating::Stars),
        }
    }
}
