//! Stamp Core - placeholder substitution logic
//!
//! This crate provides the pure logic behind the `stamp` CLI: parsing
//! `KEY=VALUE` assignments into an ordered [`VarMap`] and applying literal
//! `{{KEY}}` substitutions to a template string.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            stamp-cli (CLI)              │
//! │   (argument surface, file I/O, exit)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         stamp-core (Pure Logic)         │
//! │   (VarMap, substitution engine)         │
//! │         No I/O, no subscribers          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The boundary is deliberate: everything in this crate is a total function
//! over strings, so the CLI crate owns every side effect (reading the
//! template, creating directories, writing the output).
//!
//! ## Usage
//!
//! ```rust
//! use stamp_core::{VarMap, render};
//!
//! let vars = VarMap::from_assignments(["name=Ada", "age=36"]).unwrap();
//! let out = render("Hello, {{name}}! You are {{age}}.", &vars);
//! assert_eq!(out, "Hello, Ada! You are 36.");
//! ```

// Error types
pub mod error;

// Ordered variable map + assignment parsing
pub mod vars;

// The substitution engine
pub mod render;

pub use error::{StampError, StampResult};
pub use render::render;
pub use vars::VarMap;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
