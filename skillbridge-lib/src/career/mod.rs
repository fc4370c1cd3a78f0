//! Career product data and the analysis over it.
//!
//! The role catalog, requirement lists, roadmap tables, and gamification data
//! are all static. The only computation is the substring-based gap analysis
//! in [`analysis`].

pub mod analysis;
pub mod catalog;
pub mod progress;
pub mod roadmap;

pub use analysis::{GapAnalysis, analyze};
pub use catalog::TargetRole;
pub use roadmap::Roadmap;
