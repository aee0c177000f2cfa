//! Normalization, classification and ranking of startup pitch scoring results.
//!
//! Raw results from the scoring service flow through numbered stages:
//! clamping and formatting, status buckets, risk buckets, gauge geometry,
//! leaderboard ranking, and finally report assembly.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
