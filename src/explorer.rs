/// Block explorer links for addresses and transactions
use crate::config::NetworkConfig;

/// Build an explorer URL for an address (`is_address = true`) or a
/// transaction signature. Returns an empty string for an empty identifier.
pub fn generate_explorer_url(network: &NetworkConfig, identifier: &str, is_address: bool) -> String {
    if identifier.is_empty() {
        return String::new();
    }

    let slug = if is_address { "address" } else { "tx" };
    format!(
        "{}/{}/{}?cluster={}",
        network.explorer_url.trim_end_matches('/'),
        slug,
        identifier,
        network.cluster
    )
}

pub fn address_url(network: &NetworkConfig, address: &str) -> String {
    generate_explorer_url(network, address, true)
}

pub fn tx_url(network: &NetworkConfig, signature: &str) -> String {
    generate_explorer_url(network, signature, false)
}
