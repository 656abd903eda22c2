//! Histogram matching engine.
//!
//! Estimates a 256-point CDF per channel, builds an intensity lookup table
//! that pairs each source level with the target level of nearest CDF value,
//! and remaps the source channel through that table. Only value
//! distributions are considered; pixel positions never matter.

pub mod apply;
pub mod cdf;
pub mod mapping;
pub mod orchestrator;

pub use apply::apply_mapping;
pub use cdf::{estimate_cdf, level_counts, Cdf};
pub use mapping::{build_mapping, MappingKind, MappingTable};
pub use orchestrator::{match_channels, MatchResult};
