//! Anime & Games News - a themed RSS news page
//!
//! Fetches a small configured set of RSS feeds, normalizes their entries
//! into display-ready records, and renders a news page with a featured
//! item and per-category sections.

pub mod config;
pub mod fetcher;
pub mod pipeline;
pub mod routes;
