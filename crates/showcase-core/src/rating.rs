//! Star rating display.

use std::fmt;

/// Number of stars in a rating row.
pub const MAX_STARS: u8 = 5;

/// Default rating shown on summary cards when a project has none.
pub const DEFAULT_CARD_RATING: f64 = 3.0;

/// Default rating shown on detail screens when a project has none.
pub const DEFAULT_DETAIL_RATING: f64 = 4.0;

const FILLED: char = '★';
const EMPTY: char = '☆';

/// A star rating out of [`MAX_STARS`].
///
/// Built from the project's stored rating; clicking a star replaces the
/// value locally and never reaches the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarRating {
    stars: u8,
}

impl StarRating {
    /// Rating from a stored value, rounded to the nearest star and clamped
    /// to `0..=5`. NaN becomes zero.
    pub fn from_initial(rating: f64) -> Self {
        let stars = if rating.is_nan() {
            0
        } else {
            rating.round().clamp(0.0, f64::from(MAX_STARS)) as u8
        };
        Self { stars }
    }

    /// Number of filled stars.
    pub fn stars(&self) -> u8 {
        self.stars
    }

    /// Click on star `n` (1-based); values above the maximum are clamped.
    #[must_use]
    pub fn select(&self, n: u8) -> Self {
        Self {
            stars: n.min(MAX_STARS),
        }
    }

    /// The full row, e.g. `★★★☆☆`.
    pub fn render(&self) -> String {
        (0..MAX_STARS)
            .map(|i| if i < self.stars { FILLED } else { EMPTY })
            .collect()
    }

    /// Compact form, e.g. `3⭐`.
    pub fn badge(&self) -> String {
        format!("{}⭐", self.stars)
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
