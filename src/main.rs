use nft_minter::{
    arguments::{get_config_path, get_mint_count, is_fail_fast_enabled, patterns, print_debug_info, print_help},
    logger::{self, LogTag},
    minter::FailurePolicy,
    run::{run_minter, RunOptions},
};

/// Exit code when every edition was created
const EXIT_SUCCESS: i32 = 0;
/// Exit code for setup failures (configuration, keys, payer balance query)
const EXIT_FATAL: i32 = 1;
/// Exit code when the batch finished with failed or skipped editions
const EXIT_PARTIAL: i32 = 2;

#[tokio::main]
async fn main() {
    logger::init();

    if patterns::is_help_requested() {
        print_help();
        std::process::exit(EXIT_SUCCESS);
    }

    print_debug_info();

    let count = match get_mint_count() {
        Ok(count) => count,
        Err(e) => {
            logger::error(LogTag::System, &e);
            std::process::exit(EXIT_FATAL);
        }
    };

    let policy = if is_fail_fast_enabled() {
        FailurePolicy::AbortOnFirstFailure
    } else {
        FailurePolicy::ContinueOnError
    };

    let options = RunOptions {
        count,
        policy,
        config_path: get_config_path(),
    };

    match run_minter(options).await {
        Ok(report) if report.is_complete_success() => {
            logger::info(LogTag::System, "✅ Collection minted");
            std::process::exit(EXIT_SUCCESS);
        }
        Ok(report) => {
            logger::warning(
                LogTag::System,
                &format!(
                    "Finished with {} failed edition(s)",
                    report.failures().len()
                ),
            );
            std::process::exit(EXIT_PARTIAL);
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ {:#}", e));
            std::process::exit(EXIT_FATAL);
        }
    }
}
