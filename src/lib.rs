//! Kinship - genealogical statistics over in-memory person records.
//!
//! # Overview
//!
//! Kinship takes a collection of [`model::Person`] records (name, sex, birth
//! and death years, parent names) and derives views from it: names,
//! lifespans, filtered subsets, records enriched with a computed field, and
//! parent-to-children groupings.
//!
//! Every operation is a pure function over a borrowed slice. Input records
//! are never modified and every result is freshly allocated.
//!
//! # Modules
//!
//! - [`model`]: Person records, enriched records, and query parameters
//! - [`analytics`]: Projections, filters, enrichment, and naive lookups
//! - [`family`]: One-pass child index and indexed children enrichment
//! - [`sorting`]: Sort transforms and the comparator factory
//! - [`loader`]: Parsing collections from JSON
//! - [`api`]: HTTP API handlers
//! - [`error`]: Error types

pub mod analytics;
pub mod api;
pub mod error;
pub mod family;
pub mod loader;
pub mod model;
pub mod sorting;

pub use error::{KinshipError, Result};
pub use model::{Person, Sex};
