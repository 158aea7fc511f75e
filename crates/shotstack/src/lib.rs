//! Shotstack render API client library.
//!
//! Wraps the Shotstack HTTP API (render submission and status lookup)
//! and drives the fixed-interval status poller that turns a render id
//! into a terminal outcome.

pub mod api;
pub mod poller;

pub use api::{render_id, ShotstackClient, ShotstackError};
pub use poller::{poll_until_terminal, PollOutcome, PollerConfig, RenderStatus, StatusReport};
