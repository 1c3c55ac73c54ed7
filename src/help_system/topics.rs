use crate::registry::{DispatcherFlag, FlagTarget, Module};

pub fn topic_text(target: FlagTarget) -> &'static str {
    match target {
        FlagTarget::Module(module) => module_text(module),
        FlagTarget::Dispatcher(flag) => dispatcher_text(flag),
    }
}

fn module_text(module: Module) -> &'static str {
    match module {
        Module::Query => {
            r#"Server query module (-query/--query-server)
Purpose: query the status of a Minecraft server

Examples:
  bex -query -java -t mc.example.com:11451
  bex -query -java -t 127.0.0.1
  bex -query -bedrock -t mc.example.com:19198
  bex -query -bedrock -t 127.0.0.1:19198

Module parameters:
  -java, --java       Query a Java Edition server
  -bedrock, --bedrock Query a Bedrock Edition server
  -t, --target        Target (host:port | ip:port | host, port may be omitted when default)

Notes:
  • -java and -bedrock are mutually exclusive
  • -t is required
  • Default ports: 25565 for Java, 19132 for Bedrock"#
        }
        Module::Ping => {
            r#"Network test module (-ping/--ping-host)
Purpose: test connectivity to a host

Examples:
  bex -ping -t mc.example.com
  bex -ping -t mc.example.com -pf 10
  bex -ping -t mc.example.com -r
  bex -ping -t 127.0.0.1 -r -pi 0.5

Module parameters:
  -t, --target          Host to ping (no port)
  -r, --repeat          Ping continuously (stop with Ctrl+C)
  -pf, --ping-frequency Number of pings in normal mode (default: 4)
  -pi, --ping-interval  Seconds between pings in repeat mode (default: 1.0)

Notes:
  • -t is required
  • -r and -pf are mutually exclusive
  • -pi only applies together with -r"#
        }
        Module::Rcon => {
            r#"RCON remote control module (-rcon/--rcon-remotecontrol)
Purpose: control a Minecraft server over the RCON protocol

Examples:
  bex -rcon -t example.com -rp 25575 -rpw secret -cmd "say hello world"
  bex -rcon -t example.com -rp 25575 -rpw secret -cg
  bex -rcon -t example.com -rpw secret -cmd "say hello world"
  bex -rcon -t example.com -s "C:/Server/RCONScript/script.txt"

Module parameters:
  -t, --target          Server address (host:port | ip:port | host)
  -rpw, --rcon-password RCON password (server.properties -> rcon.password)
  -rp, --rcon-port      RCON port (server.properties -> rcon.port, default 25575)
  -cmd, --command       Run a single command
  -cg, --command-group  Open an interactive command prompt
  -s, --script          Run a BEXScript file

Notes:
  • -rp is optional, the default port is used when omitted
  • -rpw is required to open an RCON connection
  • -cmd and -cg are mutually exclusive
  • -s is used on its own"#
        }
        Module::Log => {
            r#"Log analysis module (-log/--log-analyzer)
Purpose: analyze a Minecraft server log file

Examples:
  bex -log -lp "C:/Server/logs/latest.log"

Module parameters:
  -lp, --log-path Path to the log file

Notes:
  • -lp is required"#
        }
        Module::Nbt => {
            r#"NBT analysis module (-nbt/--nbt-analyzer)
Purpose: parse a Minecraft NBT data file

Examples:
  bex -nbt -np "level.dat"

Module parameters:
  -np, --nbt-path Path to the NBT file

Notes:
  • -np is required"#
        }
        Module::Serbat => {
            r#"Launch script generator (-serbat/--generate-serverbat)
Purpose: generate a server launch script

Examples:
  bex -serbat -rq "1.20.1 Paper server, 2-4G memory, G1GC"
  bex -serbat -rq "1.20.1 Paper server, 2-4G memory, G1GC" -od "C:/Server"

Module parameters:
  -rq, --request    Description of the script to generate
  -od, --output-dir Output directory (default: current directory)

Notes:
  • -rq is required, -od is optional"#
        }
        Module::Heatmap => {
            r#"Heatmap generator (-heatmap/--generate-heatmap)
Purpose: generate player activity heatmaps

Examples:
  bex -heatmap -dfp "C:/Server/worlds/overworld/playerdata"
  bex -heatmap -dfp "C:/Server/worlds/overworld/playerdata" -mp 20
  bex -heatmap -dfp "C:/Server/worlds/overworld/playerdata" -od "C:/Server/heatmap"

Module parameters:
  -dfp, --data-folder-path playerdata folder
  -mp, --max-player        Players per chart (default: 15)
  -od, --output-dir        Output directory (default: current directory)

Notes:
  • -dfp is required, -mp and -od are optional"#
        }
        Module::World => {
            r#"World analysis module (-world/--world-analyzer)
Purpose: check Minecraft world integrity

Examples:
  bex -world -wp "C:/Server/worlds"

Module parameters:
  -wp, --world-path World folder

Notes:
  • -wp is required; for scattered worlds pass the server root and the
    module locates every level.dat"#
        }
        Module::EditNbt => {
            r#"NBT editor module (-editnbt/--nbt-editor)
Purpose: edit a Minecraft NBT data file

Examples:
  bex -editnbt -np "C:/Server/worlds/overworld/level.dat"

Module parameters:
  -np, --nbt-path Path to the NBT file

Notes:
  • -np is required"#
        }
        Module::Injector => {
            r#"DLL injector module (-injector/--dll-injector)
Purpose: inject a DLL into a running process

Examples:
  bex -injector -dp "C:/BedrockClient/latite.dll"
  bex -injector -dp "C:/BedrockClient/latite.dll" -ct "Minecraft.Windows.exe"
  bex -injector -dp "C:/BedrockClient/latite.dll" -ct "Minecraft.Windows.exe" -tm 1m30s
  bex -injector -i
  bex -injector -rc

Module parameters:
  -dp, --dll-path      DLL to inject
  -ct, --custom-target Custom injection target
  -i, --inject         Inject the last used DLL immediately
  -tm, --task-mode     Scheduled mode
  -rc, --reset-config  Reset the module configuration

Notes:
  • -dp, -ct and -tm can be combined and all end in an injection
  • -rc and -i are used on their own"#
        }
        Module::P2p => {
            r#"P2P networking module (-p2p)
Purpose: virtual network for playing together

Examples:
  bex -p2p -cn -n "MyNetwork" -pw "MyPassword"
  bex -p2p -jn -n "MyNetwork" -pw "MyPassword"
  bex -p2p -l

Module parameters:
  -cn, --create-network Create a virtual network
  -jn, --join-network   Join a virtual network
  -l, --list            List peers in the current network
  -n, --name            Network name
  -pw, --password       Network password

Notes:
  • -cn and -jn are mutually exclusive
  • -n and -pw must be given together"#
        }
        Module::Icon => {
            r#"Icon generator (-icon/--icon-maker)
Purpose: generate a server icon

Examples:
  bex -icon -pp "C:/Picture/vanilla-icon.png"
  bex -icon -pp "C:/Picture/vanilla-icon.png" -od "C:/Server"
  bex -icon -pp "C:/Picture/vanilla-icon.png" -od "C:/Server" -pn "custom-name.png"

Module parameters:
  -pp, --picture-path Source picture
  -od, --output-dir   Output directory
  -pn, --picture-name Output file name (default: server-icon.png)

Notes:
  • -pp is required, -od and -pn are optional"#
        }
        Module::Backup => {
            r#"World backup module (-backup/--world-backup)
Purpose: back up worlds, once or on a schedule

Examples:
  bex -backup -bp "C:/Server" -sd "worlds/*" -bt 1h30m -le -mx 10
  bex -backup -bp "C:/Server" -sd "worlds/*" -bt 1h30m -le
  bex -backup -bp "C:/Server" -sd "worlds/nether"

Module parameters:
  -bp, --backup-path    Working directory
  -sd, --select-dir     Folder to back up (wildcards allowed)
  -bt, --backup-time    Interval between rounds, e.g. 1h30m
  -le, --loop-execution Repeat the backup
  -mx, --max            Maximum number of rounds

Notes:
  • -bp and -sd are required
  • -le only follows -bt, -mx only follows -le
  • Archives are written as *.zip under BEX_Backup in the working directory"#
        }
    }
}

fn dispatcher_text(flag: DispatcherFlag) -> &'static str {
    match flag {
        DispatcherFlag::Help => {
            r#"Help (-h/--help)
Purpose: show the full help message

Examples:
  bex -h
  bex ?

Notes:
  • Append ? to any dispatcher flag for help on that flag only"#
        }
        DispatcherFlag::About => {
            r#"About (-about/--about)
Purpose: show program information

Examples:
  bex -about"#
        }
        DispatcherFlag::Update => {
            r#"Update check (-update/--update-bex)
Purpose: check for a newer release right away

Examples:
  bex -update

Notes:
  • Ignores the daily limit and the disable_update setting in config.json
  • The regular startup check still runs at most once per day"#
        }
    }
}
