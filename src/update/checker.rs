use chrono::{Duration, NaiveDateTime};

use crate::config::{Config, ConfigStore};
use crate::constants::UPDATE_CHECK_INTERVAL_HOURS;
use crate::update::error::UpdateError;
use crate::update::source::{VersionInfo, VersionSource};
use crate::version::{VERSION, is_newer};

/// Result of one completed fetch and comparison.
#[derive(Debug)]
pub enum Release {
    UpToDate { latest: VersionInfo },
    Available { current: String, latest: VersionInfo },
}

/// What the startup check did.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// `disable_update` is set; nothing was touched.
    Disabled,
    /// Checked less than a day ago; nothing was touched.
    Throttled,
    Checked(Result<Release, UpdateError>),
}

/// True when the config allows a check at `now`.
///
/// The sentinel and unparseable timestamps always allow one. A timestamp in
/// the future blocks checks until it is a full interval in the past.
pub fn should_check(config: &Config, now: NaiveDateTime) -> bool {
    if config.disable_update {
        return false;
    }

    match config.last_check() {
        None => true,
        Some(last) => now - last >= Duration::hours(UPDATE_CHECK_INTERVAL_HOURS),
    }
}

pub struct UpdateChecker<'a, S: VersionSource> {
    store: &'a ConfigStore,
    source: S,
    current_version: String,
}

impl<'a, S: VersionSource> UpdateChecker<'a, S> {
    pub fn new(store: &'a ConfigStore, source: S) -> Self {
        Self::with_current_version(store, source, VERSION)
    }

    pub fn with_current_version(store: &'a ConfigStore, source: S, current: &str) -> Self {
        Self {
            store,
            source,
            current_version: current.to_string(),
        }
    }

    /// Startup check, at most once per interval.
    pub fn check(&self, now: NaiveDateTime) -> UpdateOutcome {
        let config = self.store.load();
        if config.disable_update {
            return UpdateOutcome::Disabled;
        }
        if !should_check(&config, now) {
            tracing::trace!(last = %config.last_check_update, "update check throttled");
            return UpdateOutcome::Throttled;
        }
        UpdateOutcome::Checked(self.fetch_and_compare(config, now))
    }

    /// Explicit check requested by the user; ignores throttle and opt-out.
    pub fn check_now(&self, now: NaiveDateTime) -> Result<Release, UpdateError> {
        let config = self.store.load();
        self.fetch_and_compare(config, now)
    }

    fn fetch_and_compare(
        &self,
        mut config: Config,
        now: NaiveDateTime,
    ) -> Result<Release, UpdateError> {
        // Record the attempt before going to the network so a failing fetch
        // is retried no sooner than the next interval.
        config.mark_checked(now);
        self.store
            .save(&config)
            .map_err(|err| UpdateError::ConfigSave {
                message: format!("{err:#}"),
            })?;

        let latest = self.source.fetch()?;
        if is_newer(&self.current_version, &latest.version) {
            Ok(Release::Available {
                current: self.current_version.clone(),
                latest,
            })
        } else {
            Ok(Release::UpToDate { latest })
        }
    }
}
