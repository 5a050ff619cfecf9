//! # showcase-views
//!
//! Screens of the project showcase as plain state values.
//!
//! - [`ListScreen`]: every project as a card
//! - [`RandomScreen`]: two projects picked at random
//! - [`DetailScreen`]: one project by route id, in the compact or full
//!   layout
//!
//! All screens fetch through a [`showcase_client::ProjectSource`] once per
//! mount and render through [`ProjectView`].

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod fetch;
pub mod options;
pub mod project_view;
pub mod screens;

pub use fetch::{Loadable, fetch_catalog};
pub use options::{DetailOptions, DetailVariant, RatingPolicy};
pub use project_view::{CardRating, NO_IMAGE, ProjectView};
pub use screens::{CardDeck, DetailScreen, ListScreen, RandomScreen};
