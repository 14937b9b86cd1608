use anyhow::Context;
use bouquet_kit::config::cli::Command;
use bouquet_kit::core::report;
use bouquet_kit::utils::error::ErrorSeverity;
use bouquet_kit::utils::{logger, validation::Validate};
use bouquet_kit::{Bouquet, BouquetError, CliConfig, FlowerConnector, LocalStorage, TextProcessor};
use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證參數
    if let Err(e) = config.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(config.command).await {
        // anyhow 包裝的核心錯誤依嚴重程度決定退出碼
        let Some(err) = e.downcast_ref::<BouquetError>() else {
            return Err(e);
        };

        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            err,
            err.category(),
            err.severity()
        );
        eprintln!("❌ {}", err.user_friendly_message());
        eprintln!("💡 {}", err.recovery_suggestion());

        let exit_code = match err.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Strip { target, input, output } => {
            let text = match &input {
                Some(path) => tokio::fs::read_to_string(path)
                    .await
                    .map_err(BouquetError::from)?,
                None => {
                    let mut buffer = String::new();
                    tokio::io::stdin()
                        .read_to_string(&mut buffer)
                        .await
                        .map_err(BouquetError::from)?;
                    buffer
                }
            };

            let cleaned = TextProcessor::new().remove_substring_from_lines(&text, &target);

            match &output {
                Some(path) => {
                    tokio::fs::write(path, cleaned.as_bytes())
                        .await
                        .map_err(BouquetError::from)?;
                    tracing::info!("✅ Cleaned text saved to: {}", path);
                }
                None => {
                    let mut stdout = tokio::io::stdout();
                    stdout.write_all(cleaned.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                    stdout.flush().await?;
                }
            }
        }

        Command::Show { records, sort, format } => {
            let mut bouquet = load_bouquet(&records).await?;
            if sort {
                bouquet.sort_by_freshness_desc();
            }
            let rendered = report::render(&bouquet, format.into())?;
            print!("{}", rendered);
        }

        Command::Find { records, min, max } => {
            let bouquet = load_bouquet(&records).await?;
            let flower = bouquet.find_by_stem_length(min, max)?;
            println!("{}", flower);
        }

        Command::Add(args) => {
            let flower = args.to_record()?;
            let connector = FlowerConnector::new(LocalStorage::new("."));

            let mut flowers = connector.load_or_default(&args.records).await?;
            flowers.push(flower);
            connector.save(&args.records, &flowers).await?;

            let bouquet = Bouquet::from(flowers);
            tracing::info!(
                "✅ Added flower, {} now holds {} flowers (total cost {})",
                args.records,
                bouquet.len(),
                bouquet.total_cost()
            );
        }
    }

    Ok(())
}

async fn load_bouquet(records: &str) -> anyhow::Result<Bouquet> {
    let connector = FlowerConnector::new(LocalStorage::new("."));
    let flowers = connector
        .load(records)
        .await
        .with_context(|| format!("failed to load flowers from '{}'", records))?;
    Ok(Bouquet::from(flowers))
}
