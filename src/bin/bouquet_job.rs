use clap::Parser;
use bouquet_kit::utils::error::ErrorSeverity;
use bouquet_kit::utils::{logger, validation::Validate};
use bouquet_kit::{JobConfig, JobEngine, JobPipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "bouquet-job")]
#[command(about = "Run a bouquet job described by a TOML file")]
struct Args {
    /// Path to TOML job file
    #[arg(short, long, default_value = "bouquet-job.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match JobConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load job file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌 (verbose 優先於設定檔的等級)
    if config.json_logging() {
        logger::init_json_logger(if args.verbose { "debug" } else { config.log_level() });
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting bouquet job");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    // 相對路徑以設定檔所在目錄為準
    let base_dir = JobConfig::base_dir_of(&args.config);
    let source = LocalStorage::new(base_dir.to_string_lossy());
    let output = LocalStorage::new(config.rebase_output_path(&base_dir));
    tracing::debug!("Resolved output directory: {}", config.output_path());

    let pipeline = JobPipeline::new(source, output, config);
    let engine = JobEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Bouquet job completed successfully!");
            println!("✅ Bouquet job completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Bouquet job failed: {} (Category: {:?}, Severity: {:?})",
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

    Ok(())
}

fn display_config_summary(config: &JobConfig, args: &Args) {
    println!("📋 Job Summary:");
    println!(
        "  Job: {} v{}",
        config.job.name,
        config.job.version.as_deref().unwrap_or("0")
    );
    if let Some(description) = &config.job.description {
        println!("  Description: {}", description);
    }
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.load.output_formats.join(", "));

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &JobConfig) {
    println!("🔍 Dry Run Analysis:");

    if let Some(text) = &config.text {
        println!();
        println!("📄 Text Cleanup:");
        println!("  {} -> {}", text.input, text.output);
        if text.remove.is_empty() {
            println!("  Only trailing whitespace will be trimmed");
        }
        for target in &text.remove {
            println!("  ✂️ remove '{}'", target);
        }
    }

    if let Some(bouquet) = &config.bouquet {
        println!();
        println!("💐 Bouquet:");
        println!("  Records: {}", bouquet.records);
        println!("  Sort by freshness: {}", bouquet.sort_by_freshness());
        if let Some(range) = bouquet.stem_range {
            println!(
                "  Stem lookup: [{}, {}] (on not found: {})",
                range.min,
                range.max,
                if bouquet.warn_on_not_found() { "warn" } else { "fail" }
            );
        }
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
