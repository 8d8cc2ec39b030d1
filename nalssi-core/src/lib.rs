//! Core library for the `nalssi` CLI.
//!
//! This crate defines:
//! - The wttr.in client and its failure taxonomy
//! - Korean localization of upstream condition text
//! - The session state machine and the terminal renderer
//!
//! It is used by `nalssi-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod l10n;
pub mod model;
pub mod provider;
pub mod session;
pub mod view;

pub use config::WttrConfig;
pub use model::{CityQuery, WeatherReport};
pub use provider::{FetchError, WeatherProvider, wttr::WttrProvider};
pub use session::Session;
