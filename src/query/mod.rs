// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query-time scoring and site picking
//!
//! The scorer is synchronous and CPU-bound: queries are lower-cased,
//! split on whitespace, and each term scores a site when it appears as a
//! substring of the site's corpus text. The engine loads the persisted
//! corpus once and answers queries against it.

pub mod engine;
pub mod scorer;

pub use engine::QueryEngine;
pub use scorer::{query_terms, score_and_pick, score_sites, Pick};
