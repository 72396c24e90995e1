use clap::Parser;
use lead_filter::utils::{logger, validation::Validate};
use lead_filter::{CliConfig, EtlEngine, LeadPipeline, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lead-filter");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::debug!("❌ Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.base_dir.clone());
    let pipeline = LeadPipeline::new(storage, config.files());
    let engine = EtlEngine::new(pipeline);

    if let Err(e) = engine.run() {
        tracing::debug!("❌ Lead filtering failed: {}", e);
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 缺少輸入檔與其他錯誤一律以 1 結束
        println!("{}", e.user_friendly_message());
        std::process::exit(1);
    }
}
