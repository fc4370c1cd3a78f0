//! One module per screen. Each screen owns its transient widget state, takes
//! the shared [`Profile`](skillbridge_lib::Profile) by reference in `view`,
//! and reports everything else to the root `App` through its `Action` enum.

pub mod dashboard;
pub mod input;
pub mod landing;
pub mod progress;
pub mod recommendations;
pub mod skills_gap;
