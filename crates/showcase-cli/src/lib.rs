//! # showcase-cli
//!
//! Terminal front end for Showcase.
//!
//! - [`cli`]: clap argument types
//! - [`commands`]: list, random and detail commands plus the interactive
//!   detail session
//! - [`config`]: the TOML config file and its environment overlay
//! - [`config_handlers`]: `showcase config` subcommands
//! - [`logging`]: tracing subscriber setup

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use config::ShowcaseConfig;
pub use error::{Error, Result};
