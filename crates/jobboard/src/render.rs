use std::collections::BTreeSet;

use colored::{Color, ColoredString, Colorize};
use jobboard_core::lotto::Band;
use jobboard_core::{DetailPage, DetailView, ListRow, ListView, Surface, Theme};

pub const EMPTY_LIST: &str = "검색 결과가 없습니다.";
pub const FAILED_LIST: &str =
    "데이터를 불러오지 못했습니다. 요청 URL 또는 CORS 설정을 확인해 주세요.";
pub const LINK_LABEL: &str = "공고 자세히 보기";
pub const NO_LINK: &str = "링크 없음";

const RULE_WIDTH: usize = 60;

/// Colours used for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub heading: Color,
    pub accent: Color,
    pub muted: Color,
    pub label: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                heading: Color::BrightWhite,
                accent: Color::BrightCyan,
                muted: Color::BrightBlack,
                label: Color::BrightGreen,
                error: Color::BrightRed,
            },
            Theme::Light => Self {
                heading: Color::Black,
                accent: Color::Blue,
                muted: Color::BrightBlack,
                label: Color::Green,
                error: Color::Red,
            },
        }
    }

    fn rule(&self) -> ColoredString {
        "─".repeat(RULE_WIDTH).color(self.muted)
    }
}

/// Detail view title and message for the placeholder states.
pub(crate) fn placeholder(detail: &DetailView) -> Option<(&'static str, &'static str)> {
    match detail {
        DetailView::Item(_) => None,
        DetailView::Missing => Some((
            "상세 정보 없음",
            "선택된 공고 정보를 찾을 수 없습니다. 목록으로 돌아가 다시 선택해 주세요.",
        )),
        DetailView::Corrupt => Some((
            "상세 정보 오류",
            "데이터를 불러오는 중 문제가 발생했습니다. 목록에서 다시 선택해 주세요.",
        )),
        DetailView::RequestFailed => Some((
            "상세 정보",
            "요청 정보를 확인하고 다시 시도해 주세요.",
        )),
    }
}

/// Render the detail view.
pub fn format_detail(detail: &DetailView, palette: &Palette) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", palette.rule()));

    if let Some((title, message)) = placeholder(detail) {
        output.push_str(&format!("{}\n", title.color(palette.heading).bold()));
        output.push_str(&format!("{}\n", message));
        output.push_str(&format!("{}\n", palette.rule()));
        return output;
    }

    let DetailView::Item(page) = detail else {
        return output;
    };
    output.push_str(&format_detail_page(page, palette));
    output.push_str(&format!("{}\n", palette.rule()));
    output
}

fn format_detail_page(page: &DetailPage, palette: &Palette) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", page.title.color(palette.heading).bold()));
    output.push_str(&format!("{}\n", page.summary));
    output.push('\n');

    let width = page
        .entries
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &page.entries {
        let pad = width - entry.label.chars().count();
        output.push_str(&format!(
            "  {}{}  {}\n",
            entry.label.color(palette.label),
            " ".repeat(pad),
            entry.value
        ));
    }

    output.push('\n');
    if page.link.is_empty() {
        output.push_str(&format!("{}\n", NO_LINK.color(palette.muted)));
    } else {
        output.push_str(&format!(
            "{}: {}\n",
            LINK_LABEL,
            page.link.color(palette.accent).underline()
        ));
    }
    output
}

fn format_row(row: &ListRow, selected: bool, palette: &Palette) -> String {
    let marker = if selected { ">" } else { " " };
    format!(
        "{} {:>3}  {}\n        {} · {} · {}\n",
        marker.color(palette.accent).bold(),
        row.index,
        row.title.color(palette.heading).bold(),
        row.agency,
        row.location,
        row.deadline.color(palette.muted)
    )
}

/// Render a list view.
pub fn format_list(list: &ListView, palette: &Palette) -> String {
    match list {
        ListView::Pending => String::new(),
        ListView::Empty => format!("{}\n", EMPTY_LIST.color(palette.muted)),
        ListView::Failed => format!("{}\n", FAILED_LIST.color(palette.error)),
        ListView::Rows { rows, selected } => rows
            .iter()
            .map(|row| format_row(row, *selected == Some(row.index), palette))
            .collect(),
    }
}

/// Terminal surface. Each call overwrites the previous value of its region;
/// [`TerminalSurface::into_output`] renders the final state.
pub struct TerminalSurface {
    palette: Palette,
    status: String,
    summary: String,
    list: ListView,
    detail: Option<DetailView>,
    page: Option<u32>,
}

impl TerminalSurface {
    pub fn new(theme: Theme) -> Self {
        Self {
            palette: Palette::for_theme(theme),
            status: String::new(),
            summary: String::new(),
            list: ListView::Pending,
            detail: None,
            page: None,
        }
    }

    pub fn into_output(self) -> String {
        let mut output = String::new();
        if !self.status.is_empty() {
            output.push_str(&format!("{}\n", self.status.color(self.palette.accent)));
        }
        if !self.summary.is_empty() {
            output.push_str(&format!("{}\n", self.summary));
        }
        output.push_str(&format!("{}\n", self.palette.rule()));
        output.push_str(&format_list(&self.list, &self.palette));
        if let Some(detail) = &self.detail {
            output.push_str(&format_detail(detail, &self.palette));
        } else {
            output.push_str(&format!("{}\n", self.palette.rule()));
        }
        if let Some(page) = self.page {
            output.push_str(&format!("{} {}\n", "page".color(self.palette.muted), page));
        }
        output
    }
}

impl Surface for TerminalSurface {
    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn set_summary(&mut self, message: &str) {
        self.summary = message.to_string();
    }

    fn render_list(&mut self, list: ListView) {
        self.list = list;
    }

    fn render_detail(&mut self, detail: DetailView) {
        self.detail = Some(detail);
    }

    fn set_page(&mut self, page: u32) {
        self.page = Some(page);
    }
}

fn band_color(band: Band) -> Color {
    match band {
        Band::Yellow => Color::Yellow,
        Band::Blue => Color::Blue,
        Band::Red => Color::Red,
        Band::Gray => Color::BrightBlack,
        Band::Green => Color::Green,
    }
}

/// Render drawn lottery numbers as a line of coloured balls.
pub fn format_numbers(numbers: &BTreeSet<u8>, theme: Theme) -> String {
    let balls = numbers
        .iter()
        .map(|n| {
            let ball = format!(" {:>2} ", n);
            match theme {
                Theme::Dark => ball.black().on_color(band_color(Band::of(*n))).to_string(),
                Theme::Light => ball.color(band_color(Band::of(*n))).bold().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}\n", balls)
}
