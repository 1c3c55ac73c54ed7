//! Throttled, silent-on-failure check for a newer release.

mod checker;
mod error;
mod source;

pub use checker::{Release, UpdateChecker, UpdateOutcome};
pub use error::UpdateError;
pub use source::{ProxiedReleaseSource, VersionInfo, VersionSource};
