//! Showcase Core: project records and the view-state arithmetic shared by
//! every screen.
//!
//! # Modules
//!
//! - [`types`]: Project records, ids, and the document envelope
//! - [`carousel`]: Per-project image carousels
//! - [`text`]: Description truncation
//! - [`rating`]: Star rating display
//! - [`comments`]: Volatile comment board and avatar carousel
//! - [`catalog`]: Lookup by route id and random sampling
//! - [`error`]: Error type and Result alias

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod carousel;
pub mod catalog;
pub mod comments;
pub mod error;
mod proptests;
pub mod rating;
pub mod text;
pub mod types;

// Re-exports for convenience
pub use carousel::{CarouselSet, ImageCursor};
pub use catalog::{Catalog, RANDOM_SAMPLE_SIZE};
pub use comments::{AvatarCarousel, Comment, CommentBoard, CommentDraft};
pub use error::{Error, Result};
pub use rating::StarRating;
pub use text::Truncation;
pub use types::{
    Category, ContactLink, DeveloperProfile, IdMatching, Project, ProjectDocument, ProjectId,
    ProjectRecord,
};
