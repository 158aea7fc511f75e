//! PromoForge domain logic.
//!
//! Pure functions and types shared by the scraper, render, and API
//! crates: HTML metadata extraction, URL resolution, the Shotstack
//! timeline model with its builder and submit-side validation, and the
//! domain error type. No I/O happens in this crate.

pub mod error;
pub mod resolve;
pub mod scrape;
pub mod timeline;
