use clap::Parser;
use expense_tracker::core::render::{render_json, render_page, JsonReport};
use expense_tracker::utils::error::ErrorSeverity;
use expense_tracker::utils::logger;
use expense_tracker::utils::validation::Validate;
use expense_tracker::{
    CliConfig, Command, ExpenseForm, TomlConfig, TrackerApp, TrackerConfig, TrackerError,
    TrackerView,
};

fn exit_with(e: &TrackerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
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
    std::process::exit(exit_code);
}

fn load_config(cli: &CliConfig) -> Result<TrackerConfig, TrackerError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    TrackerConfig::resolve(cli.base_url.clone(), file.as_ref())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_output() {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let app = TrackerApp::new(config);

    match cli.command() {
        Command::List { json } => {
            let tracker = app.mount().await;

            if json {
                // 載入失敗時沒有可輸出的資料
                if let TrackerView::Alert(message) = tracker.view() {
                    eprintln!("⚠️  {}", message);
                    std::process::exit(2);
                }

                let report = JsonReport {
                    items: tracker.items(),
                    totals: tracker.totals(),
                    settlement: tracker.settlement(),
                };
                match render_json(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => exit_with(&e),
                }
            } else {
                println!("{}", render_page(&tracker.view()));
            }
        }
        Command::Add {
            payee,
            product,
            price,
        } => {
            let form = ExpenseForm::new(payee, product, price);

            match app.add(&form).await {
                Ok(tracker) => {
                    tracing::info!("✅ Expense saved");
                    println!("{}", render_page(&tracker.view()));
                }
                Err(e) => exit_with(&e),
            }
        }
    }

    Ok(())
}
