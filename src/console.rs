use chrono::Local;

use crate::constants::{BLUE, BRIGHT_YELLOW, GREEN, RED, RESET};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Info => GREEN,
            Level::Warn => BRIGHT_YELLOW,
            Level::Error => RED,
        }
    }
}

pub fn format_line(level: Level, message: &str) -> String {
    let now = Local::now();
    format!(
        "{BLUE}{date} {BRIGHT_YELLOW}{time} {color}[Application Thread/{label}]{RESET} {message}",
        date = now.format("%Y-%m-%d"),
        time = now.format("%H:%M:%S"),
        color = level.color(),
        label = level.label(),
    )
}

pub fn info(message: impl AsRef<str>) {
    println!("{}", format_line(Level::Info, message.as_ref()));
}

pub fn warn(message: impl AsRef<str>) {
    println!("{}", format_line(Level::Warn, message.as_ref()));
}

pub fn error(message: impl AsRef<str>) {
    println!("{}", format_line(Level::Error, message.as_ref()));
}
