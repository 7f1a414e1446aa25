//! Common test infrastructure for geosync-release tests
//!
//! This module provides shared constants, builders, and helper functions
//! to reduce duplication across test files.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: Repository, asset, and tag fixtures
//! - `builders`: Fluent builder for release API response bodies
//! - `mock_server`: Wiremock setup helpers for the releases API and assets
//! - `sync_helpers`: Config and syncer construction against a mock server

// Allow unused code in test infrastructure - not every test file uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;
pub mod constants;
pub mod mock_server;
pub mod sync_helpers;

// Re-export all public items for convenience
pub use builders::*;
pub use constants::*;
pub use mock_server::*;
pub use sync_helpers::*;
