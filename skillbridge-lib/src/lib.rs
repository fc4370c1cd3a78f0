//! Domain logic for SkillBridge: the session profile, the role catalog, the
//! gap analysis and roadmap tables, and the client for the resume extraction
//! service. Everything here is UI-free so the desktop client and the CLI can
//! share it.

pub mod career;
pub mod config;
pub mod extract;
pub mod fs;
pub mod profile;

pub use career::{GapAnalysis, Roadmap, TargetRole, analyze};
pub use config::CoreConfig;
pub use extract::ExtractorClient;
pub use profile::{Profile, SkillSet, UploadMethod};
