mod cli;
mod html;
mod render;

use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Command, SearchArgs, ThemeAction};
use jobboard_core::request::{DEFAULT_API_URL, DEFAULT_SERVICE_KEY};
use jobboard_core::{
    Board, DetailPage, DetailView, HttpFetcher, Preferences, SearchForm, SessionLoad,
    SessionStore, StoragePaths, Theme,
};
use render::{Palette, TerminalSurface};
use tracing::debug;

pub use html::detail_to_html;

/// Run the CLI with the given arguments and return the output as a string.
///
/// # Arguments
/// * `args` - Command line arguments (excluding program name)
///
/// # Returns
/// * `Ok(String)` - Successful output (stdout)
/// * `Err(String)` - Error message (stderr)
pub fn run_cli(args: &[&str]) -> Result<String, String> {
    run_cli_impl(args).map_err(|e| format!("{:#}", e))
}

fn run_cli_impl(args: &[&str]) -> anyhow::Result<String> {
    let parsed = match Cli::try_parse_from(std::iter::once("jobboard").chain(args.iter().copied()))
    {
        Ok(parsed) => parsed,
        Err(e) => {
            // Handle --help and --version as successful outputs
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                return Ok(e.to_string());
            }
            return Err(e.into());
        }
    };

    let colors = parsed.color.is_active();
    colored::control::set_override(colors);

    let paths = match &parsed.data_dir {
        Some(dir) => StoragePaths::under(dir),
        None => StoragePaths::from_user_dirs()?,
    };
    debug!(
        "Preferences at {}, session data at {}",
        paths.preferences_file().display(),
        paths.session_file().display()
    );

    match parsed.command {
        Command::Search(args) => search(&paths, colors, args),
        Command::Detail { html } => Ok(detail(&paths, colors, html)),
        Command::Lotto => Ok(lotto(&paths, colors)),
        Command::Theme { action } => theme(&paths, colors, action),
    }
}

/// Stored theme, or the terminal's theme when output is coloured. Without
/// colours the theme has no effect, so the terminal is not queried.
fn effective_theme(preferences: &Preferences, colors: bool) -> Theme {
    match preferences.theme() {
        Some(theme) => theme,
        None if colors => Theme::detect(),
        None => Theme::default(),
    }
}

fn search(paths: &StoragePaths, colors: bool, args: SearchArgs) -> anyhow::Result<String> {
    let preferences = Preferences::load(paths.preferences_file());
    let theme = effective_theme(&preferences, colors);

    let api_url = args
        .url
        .or_else(|| preferences.api_url().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let form = SearchForm {
        api_url,
        service_key: args
            .service_key
            .unwrap_or_else(|| DEFAULT_SERVICE_KEY.to_string()),
        rows: args.rows,
        keyword: args.keyword.unwrap_or_default(),
        extra_params: args.params.unwrap_or_default(),
    };

    let mut board = Board::new(HttpFetcher, form)
        .with_preferences(preferences)
        .with_session(SessionStore::new(paths.session_file()))
        .with_initial_row(args.select);
    let mut surface = TerminalSurface::new(theme);

    if args.page == 1 {
        board.search(&mut surface);
    } else {
        board.go_to(args.page, &mut surface);
    }

    let rows = board.state().items.len();
    if rows > 0 && args.select >= rows {
        bail!(
            "Row {} does not exist, page {} has {} rows",
            args.select,
            board.state().page,
            rows
        );
    }

    Ok(surface.into_output())
}

fn detail(paths: &StoragePaths, colors: bool, html: bool) -> String {
    let view = match SessionStore::new(paths.session_file()).load() {
        SessionLoad::Missing => DetailView::Missing,
        SessionLoad::Corrupt => DetailView::Corrupt,
        SessionLoad::Loaded(payload) => {
            DetailView::Item(DetailPage::new(&payload.item, &payload.normalized))
        }
    };

    if html {
        detail_to_html(&view)
    } else {
        let theme = effective_theme(&Preferences::load(paths.preferences_file()), colors);
        render::format_detail(&view, &Palette::for_theme(theme))
    }
}

fn lotto(paths: &StoragePaths, colors: bool) -> String {
    let theme = effective_theme(&Preferences::load(paths.preferences_file()), colors);
    render::format_numbers(&jobboard_core::lotto::generate_numbers(), theme)
}

fn theme(paths: &StoragePaths, colors: bool, action: ThemeAction) -> anyhow::Result<String> {
    let mut preferences = Preferences::load(paths.preferences_file());
    let current = effective_theme(&preferences, colors);

    let Some(theme) = action.apply(current) else {
        return Ok(format!("Theme: {}\n", current));
    };
    preferences.set_theme(theme);
    preferences.save().with_context(|| {
        format!(
            "Failed to save theme preference to {}",
            preferences.path().display()
        )
    })?;
    Ok(format!("Theme: {}\n", theme))
}
