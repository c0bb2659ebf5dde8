use astro_profile::utils::{logger, validation::Validate};
use astro_profile::{CliConfig, LocalStorage, ProfileEngine};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting astro-profile CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建存儲和引擎
    let storage = LocalStorage::new(".".to_string());
    let engine = ProfileEngine::new(storage, config);

    match engine.run() {
        Ok(outputs) => {
            tracing::info!("✅ Profile generated successfully!");
            println!("✅ Profile generated successfully!");
            for path in outputs {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Profile generation failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
