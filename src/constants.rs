use std::time::Duration;

pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BLUE: &str = "\x1b[94m";
pub const PURPLE: &str = "\x1b[95m";
pub const CYAN: &str = "\x1b[96m";
pub const RESET: &str = "\x1b[0m";

pub const RELEASE_URL: &str = "https://github.com/GongSunFangYun/BeaconEX/releases/latest";
pub const VERSION_FILE_URL: &str =
    "https://github.com/GongSunFangYun/BeaconEX/releases/latest/download/version.json";
pub const PROXY_PREFIX: &str = "https://gh-proxy.com/";
pub const PROJECT_URL: &str = "https://github.com/GongSunFangYun/BeaconEX";

pub const UPDATE_USER_AGENT: &str = "BeaconEX-Updater";
pub const UPDATE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// Minimum spacing between two update-check network attempts.
pub const UPDATE_CHECK_INTERVAL_HOURS: i64 = 24;

/// `YY-MM-DD HH:MM`, local time.
pub const CHECK_TIMESTAMP_FORMAT: &str = "%y-%m-%d %H:%M";
pub const NEVER_CHECKED: &str = "00-01-01 00:00";

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const MODULES_DIR_NAME: &str = "modules";

pub const LOG_ENV_VAR: &str = "BEX_LOG";
