//! Configuration system
//!
//! - `macros`: `config_struct!` for sections with embedded defaults
//! - `schemas`: the configuration sections
//! - `utils`: loading (JSON file, environment, .env), validation and
//!   key material parsing
//!
//! The configuration is loaded once at startup and passed by value into the
//! minting context; there is no global configuration state.

#[macro_use]
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{CollectionConfig, IdentityConfig, MinterConfig, NetworkConfig};
pub use utils::{
    load_config, load_config_with, load_identities, parse_commitment, parse_keypair,
    validate_config, Identities,
};
