//! Fixed lookup tables for everything the dispatcher recognises.
//!
//! The thirteen modules are declared in their tie-break priority order: when
//! several module flags appear in one invocation, the module declared first
//! here is the one launched. `Module` derives `Ord` from that declaration
//! order, so `min()` over a set of selected modules yields the winner.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Module {
    Query,
    Ping,
    Rcon,
    Log,
    Nbt,
    Serbat,
    Heatmap,
    World,
    EditNbt,
    Injector,
    P2p,
    Icon,
    Backup,
}

impl Module {
    /// Every module, highest priority first.
    pub const ALL: [Module; 13] = [
        Module::Query,
        Module::Ping,
        Module::Rcon,
        Module::Log,
        Module::Nbt,
        Module::Serbat,
        Module::Heatmap,
        Module::World,
        Module::EditNbt,
        Module::Injector,
        Module::P2p,
        Module::Icon,
        Module::Backup,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Module::Query => "query",
            Module::Ping => "ping",
            Module::Rcon => "rcon",
            Module::Log => "log",
            Module::Nbt => "nbt",
            Module::Serbat => "serbat",
            Module::Heatmap => "heatmap",
            Module::World => "world",
            Module::EditNbt => "editnbt",
            Module::Injector => "injector",
            Module::P2p => "p2p",
            Module::Icon => "icon",
            Module::Backup => "backup",
        }
    }

    /// Executable name under `modules/`, without platform suffix.
    pub fn executable(self) -> &'static str {
        match self {
            Module::Query => "bex_query",
            Module::Ping => "bex_ping",
            Module::Rcon => "bex_rcon",
            Module::Log => "bex_loganalyzer",
            Module::Nbt => "bex_nbtanalyzer",
            Module::Serbat => "bex_batmaker",
            Module::Heatmap => "bex_heatmap",
            Module::World => "bex_worldanalyzer",
            Module::EditNbt => "bex_nbteditor",
            Module::Injector => "bex_injector",
            Module::P2p => "bex_p2p",
            Module::Icon => "bex_iconmaker",
            Module::Backup => "bex_backup",
        }
    }

    /// Accepted spellings, short form first.
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            Module::Query => &["-query", "--query-server"],
            Module::Ping => &["-ping", "--ping-host"],
            Module::Rcon => &["-rcon", "--rcon-remotecontrol"],
            Module::Log => &["-log", "--log-analyzer"],
            Module::Nbt => &["-nbt", "--nbt-analyzer"],
            Module::Serbat => &["-serbat", "--generate-serverbat"],
            Module::Heatmap => &["-heatmap", "--generate-heatmap"],
            Module::World => &["-world", "--world-analyzer"],
            Module::EditNbt => &["-editnbt", "--nbt-editor"],
            Module::Injector => &["-injector", "--dll-injector"],
            Module::P2p => &["-p2p"],
            Module::Icon => &["-icon", "--icon-maker"],
            Module::Backup => &["-backup", "--world-backup"],
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Module::Query => "Query Minecraft server status",
            Module::Ping => "Run a ping test against a host",
            Module::Rcon => "RCON remote control",
            Module::Log => "Analyze server log files",
            Module::Nbt => "Parse NBT data files",
            Module::Serbat => "Generate a server launch script",
            Module::Heatmap => "Generate player activity heatmaps",
            Module::World => "Check world integrity",
            Module::EditNbt => "Edit NBT data files",
            Module::Injector => "DLL injection tool",
            Module::P2p => "P2P virtual network tool",
            Module::Icon => "Generate a server icon",
            Module::Backup => "World backup tool",
        }
    }

    /// Position in the tie-break order, 0 is highest.
    pub fn priority(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Flags handled by the dispatcher itself; they never launch a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatcherFlag {
    Help,
    About,
    Update,
}

impl DispatcherFlag {
    pub const ALL: [DispatcherFlag; 3] = [
        DispatcherFlag::Help,
        DispatcherFlag::About,
        DispatcherFlag::Update,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DispatcherFlag::Help => "help",
            DispatcherFlag::About => "about",
            DispatcherFlag::Update => "update",
        }
    }

    pub fn flags(self) -> &'static [&'static str] {
        match self {
            DispatcherFlag::Help => &["-h", "--help"],
            DispatcherFlag::About => &["-about", "--about"],
            DispatcherFlag::Update => &["-update", "--update-bex"],
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            DispatcherFlag::Help => "Show this help message",
            DispatcherFlag::About => "Show program information",
            DispatcherFlag::Update => "Check for a newer release now",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagTarget {
    Module(Module),
    Dispatcher(DispatcherFlag),
}

impl FlagTarget {
    pub fn key(self) -> &'static str {
        match self {
            FlagTarget::Module(module) => module.key(),
            FlagTarget::Dispatcher(flag) => flag.key(),
        }
    }
}

static FLAG_TABLE: Lazy<HashMap<&'static str, FlagTarget>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for module in Module::ALL {
        for flag in module.flags() {
            table.insert(*flag, FlagTarget::Module(module));
        }
    }
    for dispatcher in DispatcherFlag::ALL {
        for flag in dispatcher.flags() {
            table.insert(*flag, FlagTarget::Dispatcher(dispatcher));
        }
    }
    table
});

/// Resolve an exact token to the module or dispatcher flag it names.
pub fn lookup(token: &str) -> Option<FlagTarget> {
    FLAG_TABLE.get(token).copied()
}

/// True for every token the dispatcher consumes instead of forwarding.
pub fn is_reserved(token: &str) -> bool {
    FLAG_TABLE.contains_key(token)
}

/// Short spelling of every module flag, in priority order.
pub fn module_flag_list() -> Vec<&'static str> {
    Module::ALL.iter().map(|module| module.flags()[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_by_priority() {
        let mut sorted = Module::ALL;
        sorted.sort();
        assert_eq!(sorted, Module::ALL);
        for (idx, module) in Module::ALL.iter().enumerate() {
            assert_eq!(module.priority(), idx);
        }
        assert_eq!(Module::ALL.iter().min(), Some(&Module::Query));
    }

    #[test]
    fn every_alias_resolves_to_its_module() {
        assert_eq!(lookup("-query"), Some(FlagTarget::Module(Module::Query)));
        assert_eq!(
            lookup("--query-server"),
            Some(FlagTarget::Module(Module::Query))
        );
        assert_eq!(lookup("--dll-injector"), Some(FlagTarget::Module(Module::Injector)));
        assert_eq!(lookup("-p2p"), Some(FlagTarget::Module(Module::P2p)));
        assert_eq!(lookup("--p2p"), None);
    }

    #[test]
    fn dispatcher_flags_are_reserved() {
        for token in ["-h", "--help", "-about", "--about", "-update", "--update-bex"] {
            assert!(is_reserved(token), "{token} should be reserved");
            assert!(matches!(lookup(token), Some(FlagTarget::Dispatcher(_))));
        }
        assert!(!is_reserved("?"));
        assert!(!is_reserved("-t"));
        assert!(!is_reserved("query"));
    }

    #[test]
    fn table_holds_every_spelling_once() {
        let module_spellings: usize = Module::ALL.iter().map(|m| m.flags().len()).sum();
        let dispatcher_spellings: usize =
            DispatcherFlag::ALL.iter().map(|d| d.flags().len()).sum();
        assert_eq!(module_spellings, 25);
        assert_eq!(FLAG_TABLE.len(), module_spellings + dispatcher_spellings);
    }

    #[test]
    fn executables_are_unique() {
        let mut names: Vec<_> = Module::ALL.iter().map(|m| m.executable()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 13);
    }
}
