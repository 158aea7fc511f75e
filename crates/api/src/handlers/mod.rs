//! Request handlers, grouped by endpoint family.

pub mod audio;
pub mod render;
pub mod scrape;
