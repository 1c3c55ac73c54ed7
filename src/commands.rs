use std::ffi::OsString;

use anyhow::{Result, anyhow};
use chrono::NaiveDateTime;

use crate::banner::about_text;
use crate::console;
use crate::constants::{BLUE, BRIGHT_YELLOW, PURPLE, RELEASE_URL, RESET};
use crate::help::usage_text;
use crate::help_system::topic_help;
use crate::registry::Module;
use crate::router::{HelpRequest, Route, RouteError};
use crate::state::AppState;
use crate::update::{Release, UpdateChecker, UpdateOutcome, VersionInfo, VersionSource};
use crate::version::VERSION;

/// Startup update check, then the routed action.
///
/// `-update` runs its own forced check, so the startup one is skipped for
/// it and a single run never fetches twice. A routing error still gets the
/// startup check before it is reported.
pub fn run<S: VersionSource>(
    state: &AppState,
    routed: Result<Route, RouteError>,
    source: &S,
    now: NaiveDateTime,
) -> Result<()> {
    if !matches!(routed, Ok(Route::Update)) {
        startup_update_check(state, source, now);
    }

    match routed? {
        Route::Help(request) => handle_help(&request),
        Route::About => {
            handle_about();
            Ok(())
        }
        Route::Update => handle_update(state, source, now),
        Route::Dispatch { module, forwarded } => handle_dispatch(state, module, &forwarded),
    }
}

/// Failures stay invisible unless `BEX_LOG` is set.
fn startup_update_check<S: VersionSource>(state: &AppState, source: &S, now: NaiveDateTime) {
    let checker = UpdateChecker::new(state.config_store(), source);
    match checker.check(now) {
        UpdateOutcome::Checked(Ok(Release::Available { current, latest })) => {
            print_update_notice(&current, &latest)
        }
        UpdateOutcome::Checked(Err(err)) => tracing::debug!("update check failed: {err}"),
        outcome => tracing::trace!(?outcome, "update check finished"),
    }
}

pub fn handle_help(request: &HelpRequest) -> Result<()> {
    match request {
        HelpRequest::Full => println!("{}", usage_text()),
        HelpRequest::Topic(param) => println!("{}", topic_help(param)?),
    }
    Ok(())
}

pub fn handle_about() {
    println!("{}", about_text());
}

pub fn handle_update<S: VersionSource>(
    state: &AppState,
    source: &S,
    now: NaiveDateTime,
) -> Result<()> {
    let checker = UpdateChecker::new(state.config_store(), source);
    match checker.check_now(now) {
        Ok(Release::Available { current, latest }) => print_update_notice(&current, &latest),
        Ok(Release::UpToDate { latest }) => console::info(format!(
            "Already on the latest version (local v{VERSION}, published v{})",
            latest.version
        )),
        Err(err) => return Err(anyhow!(err).context("update check failed")),
    }
    Ok(())
}

pub fn handle_dispatch(state: &AppState, module: Module, forwarded: &[OsString]) -> Result<()> {
    state.launcher().launch(module, forwarded)?;
    Ok(())
}

fn print_update_notice(current: &str, latest: &VersionInfo) {
    let built = if latest.build_date.is_empty() {
        String::new()
    } else {
        format!(" ({})", latest.build_date)
    };
    console::info(format!(
        "{BRIGHT_YELLOW}New version {BLUE}v{}{RESET}{built} | {BRIGHT_YELLOW}current version {BLUE}v{current}{RESET}",
        latest.version
    ));
    console::info(format!(
        "{BRIGHT_YELLOW}Download it from {PURPLE}{RELEASE_URL}{BRIGHT_YELLOW}{RESET}"
    ));
    if latest.require_update {
        console::warn("This release is marked as a required update");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::NaiveDate;

    use super::*;
    use crate::update::UpdateError;

    struct CountingSource {
        latest: &'static str,
        calls: Cell<usize>,
    }

    impl CountingSource {
        fn serving(latest: &'static str) -> Self {
            Self {
                latest,
                calls: Cell::new(0),
            }
        }
    }

    impl VersionSource for CountingSource {
        fn fetch(&self) -> Result<VersionInfo, UpdateError> {
            self.calls.set(self.calls.get() + 1);
            Ok(VersionInfo {
                version: self.latest.to_string(),
                build_date: String::new(),
                require_update: false,
            })
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn update_route_fetches_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_base_dir(dir.path().to_path_buf());
        let source = CountingSource::serving("99.0.0");

        run(&state, Ok(Route::Update), &source, noon()).unwrap();
        assert_eq!(source.calls.get(), 1);
        assert_eq!(
            state.config_store().load().last_check_update,
            "25-06-01 12:00"
        );
    }

    #[test]
    fn other_routes_get_the_startup_check() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_base_dir(dir.path().to_path_buf());
        let source = CountingSource::serving(VERSION);

        run(&state, Ok(Route::About), &source, noon()).unwrap();
        assert_eq!(source.calls.get(), 1);

        // Same run time again: throttled.
        run(&state, Ok(Route::Help(HelpRequest::Full)), &source, noon()).unwrap();
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn routing_error_is_reported_after_the_startup_check() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_base_dir(dir.path().to_path_buf());
        let source = CountingSource::serving(VERSION);

        let err = run(&state, Err(RouteError::NoOperatingMode), &source, noon()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RouteError>(),
            Some(&RouteError::NoOperatingMode)
        );
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn unknown_topic_surfaces_route_error() {
        let err = handle_help(&HelpRequest::Topic("-nope".to_string())).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RouteError>(),
            Some(&RouteError::NoHelpForParameter {
                param: "-nope".to_string()
            })
        );
    }

    #[test]
    fn known_topic_succeeds() {
        assert!(handle_help(&HelpRequest::Topic("-query".to_string())).is_ok());
        assert!(handle_help(&HelpRequest::Full).is_ok());
    }

    #[test]
    fn dispatch_without_module_binary_fails() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_base_dir(dir.path().to_path_buf());
        let err = handle_dispatch(&state, Module::Query, &[]).unwrap_err();
        assert!(err.to_string().contains("module file does not exist"));
    }
}
