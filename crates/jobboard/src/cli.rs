use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jobboard_core::Theme;

/// Search public job listing APIs and pick lottery numbers
#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(about = "Search public job listing APIs and pick lottery numbers", long_about = None)]
#[command(after_help = "\
EXAMPLES:
  jobboard search                          Search the last used endpoint
  jobboard search --keyword curator        Search with a keyword
  jobboard search --page 2 --select 3      Show the fourth row of page 2
  jobboard detail                          Show the last selected listing
  jobboard lotto                           Draw six numbers")]
pub struct Cli {
    /// Directory for preferences and session data (defaults to the per-user directories)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// When to use colors in output
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: ColorWhen,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one page of listings and show the selected row
    Search(SearchArgs),
    /// Show the listing selected by the last search
    Detail {
        /// Print the detail view as an HTML fragment
        #[arg(long)]
        html: bool,
    },
    /// Draw six distinct numbers between 1 and 45
    Lotto,
    /// Show or change the output theme
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// API endpoint (defaults to the last used one)
    #[arg(long)]
    pub url: Option<String>,

    /// Keyword sent as the `keyword` parameter
    #[arg(long, short)]
    pub keyword: Option<String>,

    /// Rows per page
    #[arg(long, default_value_t = jobboard_core::request::DEFAULT_ROWS,
          value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub rows: u32,

    /// Extra query parameters, e.g. "area=seoul&sort=date"
    #[arg(long, value_name = "K=V&...")]
    pub params: Option<String>,

    /// Service key sent as `serviceKey`
    #[arg(long)]
    pub service_key: Option<String>,

    /// Page to fetch
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Row to show in detail (0-based)
    #[arg(long, default_value_t = 0)]
    pub select: usize,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ColorWhen {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Never,
    Always,
}

impl ColorWhen {
    pub fn is_active(self) -> bool {
        match self {
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
            Self::Never => false,
            Self::Always => true,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark,
}

impl ThemeAction {
    /// New theme to store, given the current one. `None` leaves it unchanged.
    pub fn apply(self, current: Theme) -> Option<Theme> {
        match self {
            Self::Show => None,
            Self::Toggle => Some(current.toggle()),
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
        }
    }
}
