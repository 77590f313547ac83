#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod bot;
mod client;
mod error;
mod handler;
mod seen;
pub mod types;

pub use bot::LemmyBot;
pub use client::LemmyClient;
pub use error::{Error, Result};
pub use handler::Outcome;
pub use seen::SeenItems;
