use crate::constants::{BLUE, BRIGHT_YELLOW, CYAN, GREEN, PURPLE, RESET};
use crate::registry::{DispatcherFlag, Module};
use crate::version::VERSION;

const FLAG_COLUMN: usize = 32;

fn flag_row(flags: &[&str], summary: &str) -> String {
    let spelled = flags.join(", ");
    format!("  {spelled:<FLAG_COLUMN$}{CYAN}[dispatcher]{RESET} {summary}\n")
}

pub fn usage_text() -> String {
    let mut modules = String::new();
    for module in Module::ALL {
        modules.push_str(&flag_row(module.flags(), module.summary()));
    }

    let mut options = String::new();
    for flag in DispatcherFlag::ALL {
        options.push_str(&flag_row(flag.flags(), flag.summary()));
    }

    format!(
        r#"{BLUE}*Current version: v{version}
*Dispatcher flags select a module; module parameters follow the dispatcher flag
*Every module has its own parameters, most of them are not shared between modules
{CYAN}[dispatcher flag]{PURPLE} ? {BLUE}shows the help for that flag
Usage: {BRIGHT_YELLOW}bex{CYAN} [dispatcher flag] {PURPLE}[module parameters]{RESET}

{GREEN}• Module selection:{RESET}
{modules}
{GREEN}• Dispatcher options:{RESET}
{options}
{GREEN}• Examples:{RESET}
  bex -query -java -t mc.example.com
  bex -ping -t 127.0.0.1 -pf 10
  bex -rcon ?
"#,
        version = VERSION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lists_every_flag() {
        let text = usage_text();
        for module in Module::ALL {
            for flag in module.flags() {
                assert!(text.contains(flag), "usage should list {flag}");
            }
        }
        for flag in DispatcherFlag::ALL {
            assert!(text.contains(flag.flags()[1]));
        }
        assert!(text.contains(VERSION));
    }

    #[test]
    fn rows_are_aligned_and_sections_ordered() {
        let text = usage_text();
        let row = flag_row(&["-ping", "--ping-host"], "x");
        assert!(row.starts_with("  -ping, --ping-host"));
        assert_eq!(row.find(CYAN), Some(2 + FLAG_COLUMN));

        let modules = text.find("Module selection").unwrap();
        let options = text.find("Dispatcher options").unwrap();
        let examples = text.find("Examples").unwrap();
        assert!(modules < options && options < examples);
    }
}
