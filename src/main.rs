use clap::Parser;
use puzzle_etl::utils::error::ErrorSeverity;
use puzzle_etl::utils::{logger, validation::Validate};
use puzzle_etl::{render, CliConfig, PuzzleEngine, PuzzleError};

fn exit_code(e: &PuzzleError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(stage: &str, e: &PuzzleError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

fn main() {
    let cli = CliConfig::parse();

    // 設定錯誤時 logger 還沒初始化，只能直接輸出
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("Run config: {:?}", config);

    let format = config.format;
    let engine = PuzzleEngine::new(config);

    let report = match engine.run() {
        Ok(report) => report,
        Err(e) => report_failure("Puzzle run", &e),
    };

    match render(&report, format) {
        Ok(output) => println!("{}", output),
        Err(e) => report_failure("Rendering", &e),
    }
}
