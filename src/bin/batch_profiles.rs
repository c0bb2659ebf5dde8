use astro_profile::config::toml_config::BatchConfig;
use astro_profile::utils::{logger, validation::Validate};
use astro_profile::{LocalStorage, ProfileEngine};
use clap::Parser;

#[derive(Parser)]
#[command(name = "batch-profiles")]
#[command(about = "Batch astrology profile generation from a TOML config")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "profiles.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - list the configured people without generating output
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting batch profile tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match BatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    println!("Batch: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        println!("  {}", description);
    }
    println!("People: {}", config.people.len());
    println!("Formats: {}", config.output.output_formats.join(", "));

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No profiles will be generated");
        for person in &config.people {
            println!("  - {} ({})", person.name, person.dob);
        }
        return Ok(());
    }

    // 創建存儲和引擎
    let storage = LocalStorage::new(".".to_string());
    let engine = ProfileEngine::new(storage, config);

    match engine.run() {
        Ok(outputs) => {
            tracing::info!("✅ Batch completed successfully!");
            println!("✅ Batch completed successfully!");
            for path in outputs {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Batch failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
