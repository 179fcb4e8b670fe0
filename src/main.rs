use badge_table::core::ConfigProvider;
use badge_table::utils::error::ErrorSeverity;
use badge_table::utils::{logger, validation::Validate};
use badge_table::{BadgeTable, CliConfig, FileSink, HttpBranchSource, StdoutSink, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting badge-table");
    tracing::debug!("CLI config: {:?}", cli);

    let code = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => run(&config, cli.stdout).await,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    1
                }
            }
        }
        None => run(&cli, cli.stdout).await,
    };

    if code > 0 {
        std::process::exit(code);
    }
    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: &C, stdout: bool) -> i32 {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        return 1;
    }

    let source = HttpBranchSource::from_config(config);
    let result = if stdout {
        let result = BadgeTable::new(source, StdoutSink, config).run().await;
        println!();
        result
    } else {
        let sink = FileSink::new(config.output_path().to_string());
        let path = sink.path_for(config.target());
        let result = BadgeTable::new(source, sink, config).run().await;
        if result.is_ok() {
            println!("📁 Output saved to: {}", path.display());
        }
        result
    };

    match result {
        Ok(rows) => {
            tracing::info!("✅ Rendered {} branch rows", rows);
            0
        }
        Err(e) => {
            tracing::error!(
                "Badge table failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            }
        }
    }
}
