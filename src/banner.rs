use rustc_version_runtime::version;

use crate::constants::{BLUE, BRIGHT_YELLOW, CYAN, GREEN, PROJECT_URL, RED, RESET};
use crate::version::VERSION;

pub fn about_text() -> String {
    let rust_version = version();

    let body = format!(
        r#"{CYAN}
  ┌─────────────────────────────────────────┐
  │  {GREEN}BeaconEX{CYAN} || {BLUE}A Minecraft server toolbox{CYAN}   │
  └─────────────────────────────────────────┘
{BRIGHT_YELLOW}  • Name: BeaconEX
  • Version: v{VERSION}
  • Built with Rust {rust_version}
  • Project: {PROJECT_URL}
  • License: GNU Lesser General Public License v3.0 (LGPL-3.0)
  {RED}• Notice:
      ├─ Commercial use requires permission
      └─ Do not use this software for unlawful purposes
{RESET}"#
    );

    let mut out = String::from("\n");
    for line in body.lines() {
        out.push_str("   ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
