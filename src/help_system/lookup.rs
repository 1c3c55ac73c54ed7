use crate::constants::{BLUE, BRIGHT_YELLOW, CYAN, RESET};
use crate::help_system::topics::topic_text;
use crate::registry::{self, DispatcherFlag, FlagTarget};
use crate::router::RouteError;

/// Accept `query` as well as `-query`.
fn normalize_param(param: &str) -> String {
    if param.starts_with('-') {
        param.to_string()
    } else {
        format!("-{param}")
    }
}

pub fn resolve_topic(param: &str) -> Result<(String, FlagTarget), RouteError> {
    let normalized = normalize_param(param);
    match registry::lookup(&normalized) {
        Some(target) => Ok((normalized, target)),
        None => Err(RouteError::NoHelpForParameter { param: normalized }),
    }
}

/// Header line plus topic body for the flag named by `param`.
pub fn topic_help(param: &str) -> Result<String, RouteError> {
    let (normalized, target) = resolve_topic(param)?;
    tracing::trace!(param = %normalized, topic = target.key(), "showing help topic");
    Ok(format!(
        "{CYAN}========== {BLUE}{normalized} {BRIGHT_YELLOW}detailed help {CYAN}=========={RESET}\n{}",
        topic_text(target)
    ))
}

pub fn unknown_topic_hint() -> String {
    let mut flags = registry::module_flag_list();
    flags.push(DispatcherFlag::Update.flags()[0]);
    format!("Available help topics: {}", flags.join(", "))
}
