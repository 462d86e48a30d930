//! # fxdraw Core
//!
//! Draw engine and rate canonicalization for the fxdraw ceremony tool.
//!
//! ## Overview
//!
//! fxdraw picks one winner from a list of named tickets. What sets it apart
//! from rolling a die is that the randomness is auditable: the generator seed
//! is built from Norges Bank's published exchange-rate fixings for an agreed
//! date, prefixed with a number the operator announces before the draw.
//! Anyone holding the transcript can fetch the same public data and replay
//! the draw.
//!
//! This crate provides:
//!
//! - **Domain types** for the roster, reference date, rate table, canonical
//!   rate string, and composed seed
//! - **The Norges Bank adapter** that fetches one day of fixings over SDMX
//!   and validates it against the fixed 37-currency set
//! - **The draw engine** that composes the seed, seeds a fresh MT19937-64
//!   instance, and draws one ticket uniformly
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Norges Bank SDMX rate source |
//! | [`domain`] | Roster, dates, rate tables, seeds |
//! | [`draw`] | Draw engine and outcome |
//! | [`error`] | Structured error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`rate_source`] | Rate source trait |
//! | [`rng`] | Generator construction and the published seeding rule |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use fxdraw_core::{DrawEngine, NorgesBankSource, RateDate, Roster};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let roster = Roster::new(vec![
//!         String::from("Alice"),
//!         String::from("Bob"),
//!     ])?;
//!     let date = RateDate::parse("2026-01-30")?;
//!
//!     let engine = DrawEngine::new(Arc::new(NorgesBankSource::new()));
//!     let outcome = engine.draw(&roster, date, "7").await?;
//!
//!     println!("seed   : {}", outcome.seed);
//!     println!("winner : {}", outcome.winner);
//!     Ok(())
//! }
//! ```
//!
//! ## Determinism
//!
//! The same roster, date, and operator number always produce the same winner,
//! provided the provider publishes the same fixings. The full procedure is
//! documented in [`rng`]; there is nothing hidden to the draw beyond the
//! operator number announced at the ceremony. The randomness here is
//! commitment-style, not cryptographic.

pub mod adapters;
pub mod domain;
pub mod draw;
pub mod error;
pub mod http_client;
pub mod rate_source;
pub mod rng;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::NorgesBankSource;

// Domain models
pub use domain::{CanonicalRates, RateDate, RateTable, Roster, Seed, CURRENCIES};

// Draw engine
pub use draw::{DrawEngine, DrawOutcome};

// Error types
pub use error::{DrawError, RateError, RateErrorKind, ValidationError};

// HTTP client types
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

// Rate source trait
pub use rate_source::RateSource;
