pub mod arguments;
pub mod config;
pub mod errors;
pub mod explorer;
pub mod logger;
pub mod metadata;
pub mod minter;
pub mod rpc;
pub mod run;
pub mod summary;
