/// Centralized command-line argument handling
///
/// Features:
/// - Global CMD_ARGS storage with thread-safe access
/// - Flag/value lookups shared by the binary and the logger
/// - Pure `*_from` variants taking an explicit argument list for tests
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Default number of NFTs minted when --count is not given
pub const DEFAULT_MINT_COUNT: u32 = 1;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

pub fn has_arg(arg: &str) -> bool {
    has_arg_in(&get_cmd_args(), arg)
}

pub fn get_arg_value(flag: &str) -> Option<String> {
    get_arg_value_in(&get_cmd_args(), flag)
}

pub fn has_arg_in(args: &[String], arg: &str) -> bool {
    args.iter().any(|a| a == arg)
}

/// Value following a flag, accepting both `--flag value` and `--flag=value`
pub fn get_arg_value_in(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{}=", flag);
    for (i, arg) in args.iter().enumerate() {
        if arg == flag {
            return args.get(i + 1).filter(|v| !v.starts_with("--")).cloned();
        }
        if let Some(value) = arg.strip_prefix(&prefix) {
            return Some(value.to_string());
        }
    }
    None
}

// =============================================================================
// MINTER FLAGS
// =============================================================================

/// Number of NFTs to mint (--count, default 1)
pub fn get_mint_count() -> Result<u32, String> {
    mint_count_from(&get_cmd_args())
}

pub fn mint_count_from(args: &[String]) -> Result<u32, String> {
    match get_arg_value_in(args, "--count") {
        None if has_arg_in(args, "--count") => Err("--count requires a value".to_string()),
        None => Ok(DEFAULT_MINT_COUNT),
        Some(raw) => {
            let count: u32 = raw
                .trim()
                .parse()
                .map_err(|e| format!("Invalid --count '{}': {}", raw, e))?;
            if count == 0 {
                return Err("--count must be at least 1".to_string());
            }
            Ok(count)
        }
    }
}

/// Optional JSON configuration file (--config <path>)
pub fn get_config_path() -> Option<String> {
    get_arg_value("--config")
}

/// Stop the batch at the first failed edition instead of continuing
pub fn is_fail_fast_enabled() -> bool {
    has_arg("--fail-fast")
}

/// Tags with debug output enabled (--debug-<tag>)
pub fn get_enabled_debug_modes() -> Vec<String> {
    enabled_debug_modes_in(&get_cmd_args())
}

pub fn enabled_debug_modes_in(args: &[String]) -> Vec<String> {
    args.iter()
        .filter_map(|a| a.strip_prefix("--debug-"))
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

pub fn print_debug_info() {
    let modes = get_enabled_debug_modes();
    if !modes.is_empty() {
        println!("Command-line arguments: {:?}", get_cmd_args());
        println!("Enabled debug modes: {:?}", modes);
    }
}

// =============================================================================
// HELP SYSTEM
// =============================================================================

pub fn print_help() {
    println!("nft-minter - Mint a Token-2022 NFT collection with on-chain metadata");
    println!();
    println!("USAGE:");
    println!("    nft-minter [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    --count <n>               Number of NFTs to mint (default: 1)");
    println!("    --config <path>           JSON configuration file");
    println!("    --fail-fast               Stop at the first failed edition");
    println!("    --quiet                   Only show warnings and errors");
    println!("    --verbose                 Show all log output");
    println!("    --no-color                Disable colored output");
    println!("    --only <tags>             Comma-separated tags to show");
    println!("    --help, -h                Show this help message");
    println!();
    println!("DEBUG FLAGS:");
    println!("    --debug-config            Configuration loading");
    println!("    --debug-metadata          Metadata construction and sizing");
    println!("    --debug-minter            Minting workflow");
    println!("    --debug-rpc               RPC calls");
    println!("    --debug-transactions      Transaction building and signatures");
    println!();
    println!("ENVIRONMENT (.env is loaded automatically):");
    println!("    PRIVATE_KEY               Payer secret key, base58 or [u8; 64] JSON (required)");
    println!("    RPC_URL, EXPLORER_URL, CLUSTER, COMMITMENT");
    println!("    COLLECTION_NAME, COLLECTION_SYMBOL, COLLECTION_BASE_URI, MINT_AMOUNT");
    println!("    AUTHORITY_PRIVATE_KEY     Mint/update authority (default: fresh keypair)");
    println!("    OWNER_ADDRESS             Receiving wallet (default: fresh keypair)");
    println!();
    println!("EXAMPLES:");
    println!("    nft-minter                          # Mint one NFT on devnet");
    println!("    nft-minter --count 5                # Mint editions 1..=5");
    println!("    nft-minter --count 3 --fail-fast    # Stop on the first failure");
}

/// Common argument parsing patterns
pub mod patterns {
    use super::*;

    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_has_arg() {
        let list = args(&["nft-minter", "--fail-fast"]);
        assert!(has_arg_in(&list, "--fail-fast"));
        assert!(!has_arg_in(&list, "--quiet"));
    }

    #[test]
    fn test_get_arg_value() {
        let list = args(&["nft-minter", "--config", "minter.json", "--count=4"]);
        assert_eq!(get_arg_value_in(&list, "--config"), Some("minter.json".to_string()));
        assert_eq!(get_arg_value_in(&list, "--count"), Some("4".to_string()));
        assert_eq!(get_arg_value_in(&list, "--symbol"), None);
    }

    #[test]
    fn test_flag_value_is_not_another_flag() {
        let list = args(&["nft-minter", "--config", "--fail-fast"]);
        assert_eq!(get_arg_value_in(&list, "--config"), None);
    }

    #[test]
    fn test_mint_count_default() {
        assert_eq!(mint_count_from(&args(&["nft-minter"])), Ok(1));
    }

    #[test]
    fn test_mint_count_parsed() {
        assert_eq!(mint_count_from(&args(&["nft-minter", "--count", "3"])), Ok(3));
    }

    #[test]
    fn test_mint_count_rejects_bad_values() {
        assert!(mint_count_from(&args(&["nft-minter", "--count", "0"])).is_err());
        assert!(mint_count_from(&args(&["nft-minter", "--count", "-2"])).is_err());
        assert!(mint_count_from(&args(&["nft-minter", "--count", "many"])).is_err());
        assert!(mint_count_from(&args(&["nft-minter", "--count"])).is_err());
    }

    #[test]
    fn test_enabled_debug_modes() {
        let list = args(&["nft-minter", "--debug-rpc", "--count", "2", "--debug-minter"]);
        assert_eq!(enabled_debug_modes_in(&list), vec!["rpc", "minter"]);
        assert!(enabled_debug_modes_in(&args(&["nft-minter", "--debug-"])).is_empty());
    }
}
