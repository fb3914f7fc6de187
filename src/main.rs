use chrono::Local;
use clap::Parser;
use natenews::config::cli::{Args, Command, OutputFormat};
use natenews::{NateConfig, NewsError, NewsService, Record, Result, ResultTable};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let level: Level = args
        .log_level
        .parse()
        .map_err(|_| NewsError::MalformedInput(format!("unknown log level {}", args.log_level)))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let service = NewsService::from_config(NateConfig::from_args(&args))?;
    let timeout = args.timeout_secs.map(Duration::from_secs);

    match &args.command {
        Command::Ranking { date, week } => {
            let date = date
                .clone()
                .unwrap_or_else(|| Local::now().format("%Y%m%d").to_string());
            let table = service
                .get_ranking_with_timeout(&date, *week, timeout)
                .await?;
            print_table(&table, args.format)?;
        }
        Command::Comments { url, page } => {
            let table = service
                .get_comments_with_timeout(url, *page, timeout)
                .await?;
            print_table(&table, args.format)?;
        }
    }

    info!("Done");
    Ok(())
}

fn print_table<T: Record + Serialize>(table: &ResultTable<T>, format: OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Table => write!(stdout, "{table}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, table)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
