//! The three screens and the card deck shared by two of them.

pub mod detail;
pub mod list;
pub mod random;

pub use detail::DetailScreen;
pub use list::ListScreen;
pub use random::RandomScreen;

use showcase_core::{CarouselSet, ImageCursor, Project, Result};

use crate::project_view::{CardRating, ProjectView};

/// Shown by list and random screens while fetching.
pub const LOADING_PROJECTS: &str = "Loading projects...";

/// Projects rendered as cards, each with its own carousel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardDeck {
    projects: Vec<Project>,
    carousels: CarouselSet,
}

impl CardDeck {
    /// Deck over `projects`, every carousel at its first image.
    pub fn new(projects: Vec<Project>) -> Self {
        let carousels = CarouselSet::for_projects(&projects);
        Self {
            projects,
            carousels,
        }
    }

    /// Projects in render order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Carousel of the project at `index`.
    pub fn cursor(&self, index: usize) -> Option<ImageCursor> {
        self.carousels.cursor(index)
    }

    /// Advances one carousel.
    #[must_use]
    pub fn next_image(&self, index: usize) -> Self {
        Self {
            carousels: self.carousels.advance(index),
            projects: self.projects.clone(),
        }
    }

    /// Steps one carousel back.
    #[must_use]
    pub fn prev_image(&self, index: usize) -> Self {
        Self {
            carousels: self.carousels.retreat(index),
            projects: self.projects.clone(),
        }
    }

    /// Jumps one carousel to `target`.
    pub fn select_image(&self, index: usize, target: usize) -> Result<Self> {
        Ok(Self {
            carousels: self.carousels.jump_to(index, target)?,
            projects: self.projects.clone(),
        })
    }

    /// Views of every project at its current image.
    pub fn views(&self) -> impl Iterator<Item = ProjectView<'_>> {
        self.projects.iter().enumerate().map(|(i, p)| {
            let cursor = self
                .carousels
                .cursor(i)
                .unwrap_or_else(|| ImageCursor::for_project(p));
            ProjectView::new(p, cursor)
        })
    }

    /// Heading followed by one card per project.
    pub fn render(&self, heading: &str, rating: CardRating) -> String {
        let mut sections = vec![heading.to_string()];
        sections.extend(self.views().map(|v| v.card(rating)));
        sections.join("\n\n")
    }
}
