//! Detail layout variants.

use std::fmt;
use std::str::FromStr;

use showcase_core::rating::DEFAULT_DETAIL_RATING;
use showcase_core::text::{DETAIL_CHAR_LIMIT, DETAIL_WORD_LIMIT};
use showcase_core::{Error, IdMatching, Project, StarRating, Truncation};

/// Where the detail layout takes its rating from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingPolicy {
    /// Always show this value.
    Fixed(f64),
    /// Show the stored rating, or this value when it is missing or zero.
    StoredOr(f64),
}

impl RatingPolicy {
    /// Initial rating for `project`.
    pub fn resolve(&self, project: &Project) -> StarRating {
        match *self {
            RatingPolicy::Fixed(value) => StarRating::from_initial(value),
            RatingPolicy::StoredOr(default) => StarRating::from_initial(project.rating_or(default)),
        }
    }
}

/// How a [`crate::DetailScreen`] finds and lays out its project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailOptions {
    /// How the route parameter is compared with project ids
    pub matching: IdMatching,
    /// How the description is shortened
    pub truncation: Truncation,
    /// Where the rating comes from
    pub rating: RatingPolicy,
    /// Show the external link and the date
    pub show_link_and_date: bool,
    /// Attach a comment board
    pub comments: bool,
}

impl DetailOptions {
    /// Compact layout: numeric id lookup, 200-character description, fixed
    /// four-star rating, no link, no date, no comments.
    pub fn compact() -> Self {
        Self {
            matching: IdMatching::Numeric,
            truncation: Truncation::Chars(DETAIL_CHAR_LIMIT),
            rating: RatingPolicy::Fixed(DEFAULT_DETAIL_RATING),
            show_link_and_date: false,
            comments: false,
        }
    }

    /// Full layout: exact string id lookup, 30-word description, stored
    /// rating falling back to four, link, date and comment board.
    pub fn full() -> Self {
        Self {
            matching: IdMatching::Exact,
            truncation: Truncation::Words(DETAIL_WORD_LIMIT),
            rating: RatingPolicy::StoredOr(DEFAULT_DETAIL_RATING),
            show_link_and_date: true,
            comments: true,
        }
    }

    /// Preset for `variant`.
    pub fn for_variant(variant: DetailVariant) -> Self {
        match variant {
            DetailVariant::Compact => Self::compact(),
            DetailVariant::Full => Self::full(),
        }
    }

    /// Same options with a different id matching mode.
    #[must_use]
    pub fn with_matching(self, matching: IdMatching) -> Self {
        Self { matching, ..self }
    }
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self::full()
    }
}

/// Named detail layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailVariant {
    /// See [`DetailOptions::compact`].
    Compact,
    /// See [`DetailOptions::full`].
    #[default]
    Full,
}

impl fmt::Display for DetailVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailVariant::Compact => write!(f, "compact"),
            DetailVariant::Full => write!(f, "full"),
        }
    }
}

impl FromStr for DetailVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(DetailVariant::Compact),
            "full" => Ok(DetailVariant::Full),
            other => Err(Error::validation_field(
                "variant",
                format!("unknown detail variant '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_preset() {
        let o = DetailOptions::compact();
        assert_eq!(o.matching, IdMatching::Numeric);
        assert_eq!(o.truncation, Truncation::Chars(200));
        assert!(!o.comments);
        assert!(!o.show_link_and_date);
    }

    #[test]
    fn test_full_preset() {
        let o = DetailOptions::full();
        assert_eq!(o.matching, IdMatching::Exact);
        assert_eq!(o.truncation, Truncation::Words(30));
        assert!(o.comments);
        assert!(o.show_link_and_date);
        assert_eq!(DetailOptions::default(), o);
    }

    #[test]
    fn test_rating_policy() {
        let rated = Project::new(1, "a").with_rating(2.0);
        let zero = Project::new(2, "b").with_rating(0.0);
        let unrated = Project::new(3, "c");

        let fixed = RatingPolicy::Fixed(4.0);
        assert_eq!(fixed.resolve(&rated).stars(), 4);

        let stored = RatingPolicy::StoredOr(4.0);
        assert_eq!(stored.resolve(&rated).stars(), 2);
        assert_eq!(stored.resolve(&zero).stars(), 4);
        assert_eq!(stored.resolve(&unrated).stars(), 4);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Compact".parse::<DetailVariant>().unwrap(), DetailVariant::Compact);
        assert_eq!(" full ".parse::<DetailVariant>().unwrap(), DetailVariant::Full);
        assert!("wide".parse::<DetailVariant>().is_err());
        assert_eq!(DetailVariant::Compact.to_string(), "compact");
        assert_eq!(
            DetailOptions::for_variant(DetailVariant::Compact),
            DetailOptions::compact()
        );
    }

    #[test]
    fn test_with_matching() {
        let o = DetailOptions::compact().with_matching(IdMatching::Canonical);
        assert_eq!(o.matching, IdMatching::Canonical);
        assert_eq!(o.truncation, Truncation::Chars(200));
    }
}
