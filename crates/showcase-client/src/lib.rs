//! # showcase-client
//!
//! Data access for Showcase.
//!
//! This crate provides everything screens fetch through:
//! - [`StoreConfig`]: endpoint, bin id and read key (from config or environment)
//! - [`ProjectSource`]: the async fetch seam
//! - [`DocumentStoreClient`]: the hosted document store over HTTP
//! - [`StaticSource`] / [`FileSource`]: in-memory and on-disk documents

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod source;

pub use client::DocumentStoreClient;
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use source::{FileSource, ProjectSource, StaticSource};
