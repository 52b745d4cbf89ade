/// Log tags identifying the subsystem that emitted a line
use colored::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTag {
    System,
    Config,
    Minter,
    Metadata,
    Rpc,
    Transactions,
    Summary,
    Other(String),
}

impl LogTag {
    /// Key used by the --debug-<key> / --verbose-<key> flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Minter => "minter".to_string(),
            LogTag::Metadata => "metadata".to_string(),
            LogTag::Rpc => "rpc".to_string(),
            LogTag::Transactions => "transactions".to_string(),
            LogTag::Summary => "summary".to_string(),
            LogTag::Other(s) => s.to_lowercase(),
        }
    }

    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Minter => "MINTER".to_string(),
            LogTag::Metadata => "METADATA".to_string(),
            LogTag::Rpc => "RPC".to_string(),
            LogTag::Transactions => "TX".to_string(),
            LogTag::Summary => "SUMMARY".to_string(),
            LogTag::Other(s) => s.to_uppercase(),
        }
    }

    pub fn colorize(&self, padded: String) -> ColoredString {
        match self {
            LogTag::System => padded.bright_yellow().bold(),
            LogTag::Config => padded.bright_white().bold(),
            LogTag::Minter => padded.bright_green().bold(),
            LogTag::Metadata => padded.bright_magenta().bold(),
            LogTag::Rpc => padded.bright_cyan().bold(),
            LogTag::Transactions => padded.bright_blue().bold(),
            LogTag::Summary => padded.bright_white().bold(),
            LogTag::Other(_) => padded.white().bold(),
        }
    }
}
