use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{PROXY_PREFIX, UPDATE_FETCH_TIMEOUT, UPDATE_USER_AGENT, VERSION_FILE_URL};
use crate::update::error::UpdateError;

const MAX_DESCRIPTOR_SIZE: u64 = 64 * 1024;

/// Remote `version.json` published with each release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    #[serde(default)]
    pub build_date: String,
    #[serde(default)]
    pub require_update: bool,
}

pub trait VersionSource {
    fn fetch(&self) -> Result<VersionInfo, UpdateError>;
}

impl<T: VersionSource + ?Sized> VersionSource for &T {
    fn fetch(&self) -> Result<VersionInfo, UpdateError> {
        (**self).fetch()
    }
}

/// Downloads the release descriptor through the public GitHub proxy.
pub struct ProxiedReleaseSource {
    url: String,
    timeout: Duration,
    spool_dir: PathBuf,
}

impl ProxiedReleaseSource {
    pub fn new() -> Self {
        Self {
            url: format!("{PROXY_PREFIX}{VERSION_FILE_URL}"),
            timeout: UPDATE_FETCH_TIMEOUT,
            spool_dir: std::env::temp_dir(),
        }
    }
}

impl Default for ProxiedReleaseSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSource for ProxiedReleaseSource {
    fn fetch(&self) -> Result<VersionInfo, UpdateError> {
        tracing::debug!(url = %self.url, "fetching version descriptor");
        let response = ureq::get(&self.url)
            .timeout(self.timeout)
            .set("User-Agent", UPDATE_USER_AGENT)
            .set("Accept", "application/json")
            .call()?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(UpdateError::Http { status });
        }

        spool_and_parse(response.into_reader(), &self.spool_dir)
    }
}

/// Copy the body into a scoped temp file, then parse it back.
///
/// The temp file is removed when this returns, whatever the outcome.
pub(crate) fn spool_and_parse(
    reader: impl Read,
    spool_dir: &Path,
) -> Result<VersionInfo, UpdateError> {
    let mut artifact = tempfile::Builder::new()
        .prefix("bex_version_")
        .suffix(".json")
        .tempfile_in(spool_dir)?;

    io::copy(&mut reader.take(MAX_DESCRIPTOR_SIZE), artifact.as_file_mut())?;

    let data = fs::read_to_string(artifact.path())?;
    let info = serde_json::from_str(&data)?;
    Ok(info)
}
