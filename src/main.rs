use clap::Parser;
use tier_split::utils::error::{ErrorSeverity, SplitError};
use tier_split::utils::logger;
use tier_split::{render, CliConfig, PreviewEngine};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting tier-split preview");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Preview failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

fn run(config: &CliConfig) -> Result<String, SplitError> {
    let settings = config.settings()?;
    let form = config.load_form()?;

    let engine = PreviewEngine::new(settings.display);
    let preview = engine.preview(&form);

    tracing::info!(
        "✅ Allocated {} across {} people",
        preview.display.total_amount,
        preview.summary.total_people
    );
    if preview.summary.drift != 0 {
        tracing::info!("Rounding drift: {}", preview.display.drift);
    }

    render(&preview, settings.output)
}
