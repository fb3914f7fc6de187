use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Ranking page endpoint
    #[arg(long, env = "NATENEWS_RANKING_URL", global = true)]
    pub ranking_url: Option<String>,

    /// Comment listing endpoint
    #[arg(long, env = "NATENEWS_COMMENT_URL", global = true)]
    pub comment_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Articles ranked by comment volume
    Ranking {
        /// Ranking date as yyyymmdd; defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Use the weekly ranking instead of the daily one
        #[arg(long)]
        week: bool,
    },
    /// One page of an article's comments
    Comments {
        /// Article URL, e.g. https://news.nate.com/view/20220530n31323?mid=n1006
        url: String,

        /// 1-based comment page
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated with a header line
    Table,
    Json,
}
