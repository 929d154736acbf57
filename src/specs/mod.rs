// src/specs/mod.rs
//! # Page specs
//!
//! One module per page type on the trail site. Each spec encodes *where the
//! data lives in the HTML* and *how to pull it out without a DOM*.
//!
//! ## What lives here
//! - **Pure parsing** of already-fetched documents: no network, no sleeps.
//! - **Pattern precedence** for every field, written as ordered cascades so the
//!   first matching pattern wins and later ones are fallbacks.
//! - **Light shaping** of results into [`crate::trail::Trail`] records or plain URL lists.
//!
//! ## What does **not** live here
//! - Fetching, retries and politeness delays (`core::net`, `scrape`).
//! - Coordinate estimation, sorting and totals (`geo`, `dataset`).
//! - Validity filtering; a spec always returns a record, the crawler decides
//!   whether to keep it.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_trails → specs::listing::extract_trail_links
//!                                 → specs::trail::parse_trail (per link)
//! ```
//!
//! ## Conventions
//! - Case-insensitive tag and attribute matching.
//! - Missing data yields defaults (empty string, `0.0`, `None`), never an error.
//! - Testable offline against inline HTML fixtures.
//!
//! ## Current specs
//! - `listing` – trail detail links on a state listing page, deduplicated, in
//!   document order, excluding map and photo sub-pages.
//! - `trail` – one trail record from a detail page.
pub mod listing;
pub mod trail;
