//! Two projects picked at random.

use rand::Rng;
use showcase_client::ProjectSource;
use showcase_core::{ImageCursor, Project, RANDOM_SAMPLE_SIZE};

use super::{CardDeck, LOADING_PROJECTS};
use crate::fetch::{Loadable, fetch_catalog};
use crate::project_view::CardRating;

/// Heading of the random screen.
pub const RANDOM_HEADING: &str = "Random Projects";

/// The random screen. Cards have a carousel but no thumbnails.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RandomScreen {
    deck: Loadable<CardDeck>,
}

impl RandomScreen {
    /// A screen that has not fetched yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches once and keeps [`RANDOM_SAMPLE_SIZE`] projects chosen with
    /// the thread RNG.
    pub async fn mount<S>(&self, source: &S) -> Self
    where
        S: ProjectSource + ?Sized,
    {
        let catalog = fetch_catalog(source).await;
        let picked = catalog.sample(RANDOM_SAMPLE_SIZE, &mut rand::rng());
        Self::loaded(picked)
    }

    /// Like [`Self::mount`] with a caller-supplied RNG.
    pub async fn mount_with_rng<S, R>(&self, source: &S, rng: &mut R) -> Self
    where
        S: ProjectSource + ?Sized,
        R: Rng + ?Sized,
    {
        let catalog = fetch_catalog(source).await;
        Self::loaded(catalog.sample(RANDOM_SAMPLE_SIZE, rng))
    }

    fn loaded(picked: Vec<Project>) -> Self {
        tracing::info!(count = picked.len(), "Random screen loaded");
        Self {
            deck: Loadable::Loaded(CardDeck::new(picked)),
        }
    }

    /// Returns `true` until mounted.
    pub fn is_loading(&self) -> bool {
        self.deck.is_loading()
    }

    /// Picked projects; empty while loading.
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

    /// Text rendering of the screen.
    pub fn render(&self) -> String {
        match &self.deck {
            Loadable::Loading => LOADING_PROJECTS.to_string(),
            Loadable::Loaded(d) => d.render(RANDOM_HEADING, CardRating::Badge),
        }
    }
}
