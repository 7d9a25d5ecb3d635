//! rulesync 命令行入口
//! 拉取上游 ESLint / TSLint 规则目录，与内部映射表对比并打印报告

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use rulesync::config::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};
use rulesync::{ConfigManager, LintTool, RuleComparator, SyncResult};

#[derive(Parser)]
#[command(
    name = "rulesync",
    version,
    about = "Compare the internal lint rule catalog with upstream ESLint/TSLint",
    after_help = "Examples:\n  rulesync eslint\n  rulesync all --catalog-dir data --timeout 10"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    /// Directory containing tslint_rules.json, eslint_rules.json and unused_tslint_rules.json
    #[arg(long, global = true, default_value = "data")]
    catalog_dir: PathBuf,

    /// GitHub API base URL
    #[arg(long, global = true, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// User-Agent header sent upstream
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// HTTP timeout in seconds (0 disables the timeout)
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Compare against eslint/eslint lib/rules
    Eslint,
    /// Compare against palantir/tslint src/rules
    Tslint,
    /// Run both comparisons concurrently
    All,
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

// 打印单个报告，失败时写日志并返回 false
fn emit(tool: LintTool, result: SyncResult<rulesync::ComparisonReport>) -> bool {
    match result {
        Ok(report) => {
            println!("{}\n", report);
            true
        }
        Err(e) => {
            error!("{} comparison failed: {}", tool, e);
            false
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = ConfigManager::custom()
        .catalog_dir(cli.catalog_dir)
        .api_base_url(cli.api_url)
        .user_agent(cli.user_agent)
        .http_timeout(cli.timeout)
        .verbose(cli.verbose)
        .build();
    init_logging(config.verbose)?;

    let comparator = match RuleComparator::from_config(&config).await {
        Ok(comparator) => comparator,
        Err(e) => {
            error!("failed to initialise: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let ok = match cli.cmd.unwrap_or(Commands::All) {
        Commands::Eslint => emit(LintTool::EsLint, comparator.compare_to_eslint().await),
        Commands::Tslint => emit(LintTool::TsLint, comparator.compare_to_tslint().await),
        Commands::All => {
            let (eslint, tslint) = comparator.compare_all().await;
            let eslint_ok = emit(LintTool::EsLint, eslint);
            let tslint_ok = emit(LintTool::TsLint, tslint);
            eslint_ok && tslint_ok
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
