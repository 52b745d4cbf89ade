use crate::config::NetworkConfig;
use crate::explorer::address_url;
use crate::logger::{self, LogTag};
use crate::minter::{BatchReport, CreationResult, MintFailure};
use crate::rpc::RpcStats;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Display row for a created edition
#[derive(Tabled)]
pub struct CreatedNftDisplay {
    #[tabled(rename = "#")]
    edition: u32,
    #[tabled(rename = "🔑 Mint")]
    mint: String,
    #[tabled(rename = "🔗 Explorer")]
    explorer: String,
}

/// Display row for a failed edition
#[derive(Tabled)]
pub struct FailedNftDisplay {
    #[tabled(rename = "#")]
    edition: u32,
    #[tabled(rename = "🧩 Stage")]
    stage: String,
    #[tabled(rename = "🔑 Mint")]
    mint: String,
    #[tabled(rename = "❌ Error")]
    error: String,
}

impl CreatedNftDisplay {
    fn from_result(result: &CreationResult, network: &NetworkConfig) -> Self {
        Self {
            edition: result.edition,
            mint: result.mint_address.clone(),
            explorer: address_url(network, &result.mint_address),
        }
    }
}

impl FailedNftDisplay {
    fn from_failure(failure: &MintFailure) -> Self {
        let stage = failure
            .stage()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mint = if failure.is_partial() {
            format!("{} (partial)", failure.mint_address)
        } else {
            failure.mint_address.clone()
        };

        Self {
            edition: failure.edition,
            stage,
            mint,
            error: failure.error.to_string(),
        }
    }
}

/// Render the end-of-run summary as plain text
pub fn build_summary(report: &BatchReport, network: &NetworkConfig) -> String {
    let created = report.created();
    let failures = report.failures();
    let elapsed = report.finished_at - report.started_at;

    let mut out = format!(
        "Created {}/{} NFT(s) in {:.1}s",
        created.len(),
        report.requested,
        elapsed.num_milliseconds() as f64 / 1000.0
    );
    if !failures.is_empty() {
        out.push_str(&format!(", {} failed", failures.len()));
    }
    if report.skipped() > 0 {
        out.push_str(&format!(", {} not attempted", report.skipped()));
    }
    out.push('\n');

    if !created.is_empty() {
        let rows: Vec<CreatedNftDisplay> = created
            .iter()
            .map(|r| CreatedNftDisplay::from_result(r, network))
            .collect();
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
        out.push_str(&format!("\n{}\n", table));
    }

    if !failures.is_empty() {
        let rows: Vec<FailedNftDisplay> = failures
            .iter()
            .map(|f| FailedNftDisplay::from_failure(f))
            .collect();
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
        out.push_str(&format!("\n{}\n", table));
    }

    out
}

/// Print the summary and, when available, RPC request counters
pub fn print_summary(report: &BatchReport, network: &NetworkConfig, stats: Option<&RpcStats>) {
    println!("\n{}", build_summary(report, network));

    if let Some(stats) = stats {
        logger::info(
            LogTag::Summary,
            &format!(
                "RPC: {} request(s), {:.0}% ok, avg {}ms, {} transaction(s) confirmed",
                stats.total_requests,
                stats.success_rate() * 100.0,
                stats.average_response_time_ms(),
                stats.transactions_confirmed
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{MintError, MintStage};
    use chrono::Utc;

    fn report() -> BatchReport {
        let now = Utc::now();
        BatchReport {
            requested: 3,
            outcomes: vec![
                Ok(CreationResult {
                    edition: 1,
                    mint_address: "MintOne111".to_string(),
                    initialization_signature: "sig1".to_string(),
                    mint_signature: "sig2".to_string(),
                    authority_revocation_signature: "sig3".to_string(),
                }),
                Err(MintFailure {
                    edition: 2,
                    mint_address: "MintTwo222".to_string(),
                    error: MintError::rpc("insufficient funds").at(MintStage::MintTo),
                }),
            ],
            aborted: true,
            started_at: now,
            finished_at: now,
        }
    }

    #[test]
    fn test_summary_header() {
        let summary = build_summary(&report(), &NetworkConfig::default());
        assert!(summary.starts_with("Created 1/3 NFT(s)"));
        assert!(summary.contains("1 failed"));
        assert!(summary.contains("1 not attempted"));
    }

    #[test]
    fn test_summary_tables() {
        let summary = build_summary(&report(), &NetworkConfig::default());
        assert!(summary.contains("https://explorer.solana.com/address/MintOne111?cluster=devnet"));
        assert!(summary.contains("mint-to"));
        assert!(summary.contains("MintTwo222 (partial)"));
    }

    #[test]
    fn test_summary_without_failures_has_one_table() {
        let mut report = report();
        report.outcomes.pop();
        report.requested = 1;

        let summary = build_summary(&report, &NetworkConfig::default());
        assert!(!summary.contains("failed"));
        assert!(!summary.contains("Stage"));
    }
}
