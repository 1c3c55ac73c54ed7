//! Turns the raw token vector into exactly one route.
//!
//! Routing never consumes values: a module flag's arguments are opaque and
//! travel to the child untouched. Forwarding strips reserved tokens by exact
//! string match only, so a module value spelled like a dispatcher flag
//! (`-t -h`, say) is stripped as well. Tokens stay `OsString` throughout;
//! one that is not valid UTF-8 can never be a flag and is simply forwarded.

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

use crate::registry::{self, DispatcherFlag, FlagTarget, Module};

pub const HELP_MARKER: &str = "?";

fn flag_of(token: &OsStr) -> Option<FlagTarget> {
    token.to_str().and_then(registry::lookup)
}

fn is_reserved(token: &OsStr) -> bool {
    token.to_str().is_some_and(registry::is_reserved)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no operating mode specified, use -h to list the available modules")]
    NoOperatingMode,
    #[error("no help available for parameter {param}")]
    NoHelpForParameter { param: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpRequest {
    Full,
    /// Help for the flag written just before a `?` token, as typed.
    Topic(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Help(HelpRequest),
    About,
    Update,
    Dispatch {
        module: Module,
        forwarded: Vec<OsString>,
    },
}

/// Recognised flags of one invocation. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    dispatcher: Vec<DispatcherFlag>,
    modules: BTreeSet<Module>,
    tokens: Vec<OsString>,
}

impl ParsedInvocation {
    pub fn parse(args: &[OsString]) -> Self {
        let mut dispatcher = Vec::new();
        let mut modules = BTreeSet::new();

        for arg in args {
            match flag_of(arg) {
                Some(FlagTarget::Module(module)) => {
                    modules.insert(module);
                }
                Some(FlagTarget::Dispatcher(flag)) => {
                    if !dispatcher.contains(&flag) {
                        dispatcher.push(flag);
                    }
                }
                None => {}
            }
        }

        Self {
            dispatcher,
            modules,
            tokens: args.to_vec(),
        }
    }

    pub fn has(&self, flag: DispatcherFlag) -> bool {
        self.dispatcher.contains(&flag)
    }

    pub fn selected_modules(&self) -> impl Iterator<Item = Module> + '_ {
        self.modules.iter().copied()
    }

    /// Highest-priority selected module, regardless of command-line order.
    pub fn resolve_module(&self) -> Option<Module> {
        self.modules.first().copied()
    }

    pub fn tokens(&self) -> &[OsString] {
        &self.tokens
    }
}

/// Find a `?` token. First position asks for full help, any later position
/// asks for help on the token right before it. A lone `-h`/`--help` is the
/// same as a leading `?`.
pub fn scan_for_help(args: &[OsString]) -> Option<HelpRequest> {
    if let Some(idx) = args.iter().position(|arg| arg == HELP_MARKER) {
        return Some(match idx {
            0 => HelpRequest::Full,
            _ => HelpRequest::Topic(args[idx - 1].to_string_lossy().into_owned()),
        });
    }

    match args {
        [only] if flag_of(only) == Some(FlagTarget::Dispatcher(DispatcherFlag::Help)) => {
            Some(HelpRequest::Full)
        }
        _ => None,
    }
}

/// Every token that is not a reserved dispatcher token, order preserved.
pub fn filter_forwarded(args: &[OsString]) -> Vec<OsString> {
    args.iter()
        .filter(|arg| !is_reserved(arg))
        .cloned()
        .collect()
}

pub fn route(args: &[OsString]) -> Result<Route, RouteError> {
    if let Some(request) = scan_for_help(args) {
        tracing::debug!(?request, "help requested");
        return Ok(Route::Help(request));
    }

    let invocation = ParsedInvocation::parse(args);
    tracing::trace!(?invocation, "parsed invocation");

    if invocation.has(DispatcherFlag::Help) {
        return Ok(Route::Help(HelpRequest::Full));
    }
    if invocation.has(DispatcherFlag::About) {
        return Ok(Route::About);
    }
    if invocation.has(DispatcherFlag::Update) {
        return Ok(Route::Update);
    }

    let module = invocation
        .resolve_module()
        .ok_or(RouteError::NoOperatingMode)?;
    if invocation.selected_modules().count() > 1 {
        tracing::debug!(
            %module,
            priority = module.priority(),
            "several module flags given, using highest priority"
        );
    }

    Ok(Route::Dispatch {
        module,
        forwarded: filter_forwarded(invocation.tokens()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<OsString> {
        tokens.iter().map(OsString::from).collect()
    }

    #[test]
    fn single_module_flag_selects_that_module() {
        for module in Module::ALL {
            for flag in module.flags() {
                let routed = route(&args(&[*flag, "-t", "example.com"])).unwrap();
                assert_eq!(
                    routed,
                    Route::Dispatch {
                        module,
                        forwarded: args(&["-t", "example.com"]),
                    }
                );
            }
        }
    }

    #[test]
    fn ping_scenario_forwards_module_arguments() {
        let routed = route(&args(&["-ping", "-t", "1.2.3.4", "-pf", "10"])).unwrap();
        assert_eq!(
            routed,
            Route::Dispatch {
                module: Module::Ping,
                forwarded: args(&["-t", "1.2.3.4", "-pf", "10"]),
            }
        );
    }

    #[test]
    fn priority_order_breaks_ties_independent_of_position() {
        let a = route(&args(&["-backup", "-ping", "-query"])).unwrap();
        let b = route(&args(&["-query", "-backup", "-ping"])).unwrap();
        for r in [a, b] {
            assert!(matches!(r, Route::Dispatch { module: Module::Query, .. }));
        }

        let r = route(&args(&["--world-backup", "-icon", "--nbt-editor"])).unwrap();
        assert!(matches!(r, Route::Dispatch { module: Module::EditNbt, .. }));
    }

    #[test]
    fn empty_invocation_has_no_operating_mode() {
        assert_eq!(route(&[]), Err(RouteError::NoOperatingMode));
        assert_eq!(
            route(&args(&["-t", "example.com"])),
            Err(RouteError::NoOperatingMode)
        );
    }

    #[test]
    fn lone_help_flag_or_marker_shows_full_help() {
        for token in ["-h", "--help", "?"] {
            assert_eq!(
                route(&args(&[token])),
                Ok(Route::Help(HelpRequest::Full))
            );
        }
    }

    #[test]
    fn marker_after_flag_requests_topic() {
        assert_eq!(
            route(&args(&["-query", "?"])),
            Ok(Route::Help(HelpRequest::Topic("-query".to_string())))
        );
        assert_eq!(
            scan_for_help(&args(&["-ping", "-t", "?"])),
            Some(HelpRequest::Topic("-t".to_string()))
        );
        assert_eq!(
            scan_for_help(&args(&["?", "-ping"])),
            Some(HelpRequest::Full)
        );
    }

    #[test]
    fn dispatcher_flags_win_over_modules() {
        assert_eq!(
            route(&args(&["-ping", "-t", "x", "--help"])),
            Ok(Route::Help(HelpRequest::Full))
        );
        assert_eq!(route(&args(&["-rcon", "-about"])), Ok(Route::About));
        assert_eq!(route(&args(&["-about", "-h"])), Ok(Route::Help(HelpRequest::Full)));
        assert_eq!(route(&args(&["--update-bex"])), Ok(Route::Update));
        assert_eq!(route(&args(&["-update", "-about"])), Ok(Route::About));
    }

    #[test]
    fn filtering_strips_reserved_tokens_and_keeps_order() {
        let input = args(&["-t", "-query", "a", "--about", "b", "-x", "--ping-host", "c"]);
        let filtered = filter_forwarded(&input);
        assert_eq!(filtered, args(&["-t", "a", "b", "-x", "c"]));
        assert_eq!(filter_forwarded(&filtered), filtered);
    }

    #[test]
    fn filtering_strips_colliding_module_values() {
        // A target literally named `-about` is indistinguishable from the flag.
        let filtered = filter_forwarded(&args(&["-query", "-t", "-about"]));
        assert_eq!(filtered, args(&["-t"]));
    }

    #[test]
    fn parse_records_every_selected_module() {
        let invocation = ParsedInvocation::parse(&args(&["-log", "x", "-nbt", "-log"]));
        let selected: Vec<_> = invocation.selected_modules().collect();
        assert_eq!(selected, vec![Module::Log, Module::Nbt]);
        assert_eq!(invocation.resolve_module(), Some(Module::Log));
        assert!(!invocation.has(DispatcherFlag::Help));
        assert_eq!(invocation.tokens().len(), 4);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_tokens_are_forwarded_untouched() {
        use std::os::unix::ffi::OsStringExt;

        let path = OsString::from_vec(b"world/\xffplayer.dat".to_vec());
        let input = vec![OsString::from("-nbt"), OsString::from("-p"), path.clone()];
        assert_eq!(
            route(&input),
            Ok(Route::Dispatch {
                module: Module::Nbt,
                forwarded: vec![OsString::from("-p"), path],
            })
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_token_before_marker_names_a_lossy_topic() {
        use std::os::unix::ffi::OsStringExt;

        let input = vec![OsString::from_vec(b"-q\xff".to_vec()), OsString::from("?")];
        assert_eq!(
            scan_for_help(&input),
            Some(HelpRequest::Topic("-q\u{fffd}".to_string()))
        );
    }
}
