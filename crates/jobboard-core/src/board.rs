//! Paginated job board controller.
//!
//! [`Board`] owns the page state and the search form, talks to a
//! [`Fetcher`] and pushes everything it wants shown to a [`Surface`]. Each
//! load overwrites what the previous one displayed.

use serde_json::Value;
use tracing::{debug, warn};

use crate::detail::{DetailEntry, build_detail_list};
use crate::extract::{extract_items, extract_total_count};
use crate::fetch::Fetcher;
use crate::normalize::{NormalizedItem, normalize_item};
use crate::request::SearchForm;
use crate::store::{Preferences, SessionPayload, SessionStore};

pub const STATUS_LOADING: &str = "데이터를 불러오는 중입니다...";
pub const SUMMARY_LOADING: &str = "일자리 정보를 불러오는 중입니다.";
pub const SUMMARY_FAILED: &str = "오류로 인해 데이터를 가져오지 못했습니다.";

/// Current page and the items shown on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub page: u32,
    pub total: u64,
    pub items: Vec<Value>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            total: 0,
            items: Vec::new(),
        }
    }
}

/// One row of the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub index: usize,
    pub title: String,
    pub agency: String,
    pub location: String,
    pub deadline: String,
}

impl ListRow {
    fn new(index: usize, normalized: &NormalizedItem) -> Self {
        Self {
            index,
            title: normalized.title.clone(),
            agency: normalized.agency.clone(),
            location: normalized.location.clone(),
            deadline: normalized.deadline.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Cleared while a request is outstanding.
    Pending,
    /// The request succeeded but returned nothing.
    Empty,
    /// The request failed.
    Failed,
    Rows {
        rows: Vec<ListRow>,
        selected: Option<usize>,
    },
}

/// Everything the detail view shows for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub entries: Vec<DetailEntry>,
}

impl DetailPage {
    pub fn new(raw: &Value, normalized: &NormalizedItem) -> Self {
        Self {
            title: normalized.title.clone(),
            summary: normalized.summary.clone(),
            link: normalized.link.clone(),
            entries: build_detail_list(raw, normalized),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Item(DetailPage),
    /// No stored selection.
    Missing,
    /// Stored selection could not be read.
    Corrupt,
    /// The list request failed.
    RequestFailed,
}

/// Rendering capability set driven by the board.
pub trait Surface {
    fn set_status(&mut self, message: &str);
    fn set_summary(&mut self, message: &str);
    fn render_list(&mut self, list: ListView);
    fn render_detail(&mut self, detail: DetailView);
    fn set_page(&mut self, page: u32);
}

pub struct Board<F: Fetcher> {
    fetcher: F,
    form: SearchForm,
    state: PageState,
    preferences: Option<Preferences>,
    session: Option<SessionStore>,
    initial_row: usize,
}

impl<F: Fetcher> Board<F> {
    pub fn new(fetcher: F, form: SearchForm) -> Self {
        Self {
            fetcher,
            form,
            state: PageState::default(),
            preferences: None,
            session: None,
            initial_row: 0,
        }
    }

    /// Remember the last used URL in `preferences`.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Store the selected row in `session`.
    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    /// Row selected after each successful load. Nothing is selected when the
    /// page has fewer rows.
    pub fn with_initial_row(mut self, index: usize) -> Self {
        self.initial_row = index;
        self
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Start a new search from the first page.
    pub fn search(&mut self, surface: &mut impl Surface) {
        self.state.page = 1;
        self.load(surface);
    }

    pub fn next_page(&mut self, surface: &mut impl Surface) {
        self.state.page = self.state.page.saturating_add(1);
        self.load(surface);
    }

    /// Go back one page. Does nothing on the first page.
    pub fn prev_page(&mut self, surface: &mut impl Surface) {
        if self.state.page > 1 {
            self.state.page -= 1;
            self.load(surface);
        }
    }

    /// Jump to `page`, clamped to the first page.
    pub fn go_to(&mut self, page: u32, surface: &mut impl Surface) {
        self.state.page = page.max(1);
        self.load(surface);
    }

    /// Fetch the current page and render it.
    pub fn load(&mut self, surface: &mut impl Surface) {
        let api_url = self.form.api_url.trim().to_string();
        let url = match self.form.build_url(self.state.page) {
            Ok(url) => url,
            Err(e) if api_url.is_empty() => {
                surface.set_status(&e.to_string());
                return;
            }
            Err(e) => {
                self.show_failure(surface, &e.to_string());
                surface.set_page(self.state.page);
                return;
            }
        };

        self.remember_url(&api_url);

        surface.set_status(STATUS_LOADING);
        surface.render_list(ListView::Pending);
        surface.set_summary(SUMMARY_LOADING);

        match self.fetcher.fetch(&url) {
            Ok(data) => {
                let items = extract_items(&data);
                self.state.total = extract_total_count(&data, items.len() as u64);
                self.state.items = items;
                debug!(
                    "Page {}: {} items of {}",
                    self.state.page,
                    self.state.items.len(),
                    self.state.total
                );

                self.render_rows(surface);
                surface.set_summary(&format!(
                    "현재 페이지: {} · 표시: {}건",
                    self.state.page,
                    self.state.items.len()
                ));
                surface.set_status(&format!(
                    "총 {}건 중 {}건 표시 중",
                    self.state.total,
                    self.state.items.len()
                ));
            }
            Err(e) => {
                warn!("Request for page {} failed: {}", self.state.page, e);
                self.show_failure(surface, &e.to_string());
            }
        }

        surface.set_page(self.state.page);
    }

    /// Show the detail of row `index` and store it for the detail view.
    /// Returns false when there is no such row.
    pub fn select(&self, index: usize, surface: &mut impl Surface) -> bool {
        let Some(item) = self.state.items.get(index) else {
            return false;
        };
        let normalized = normalize_item(item);
        surface.render_detail(DetailView::Item(DetailPage::new(item, &normalized)));

        if let Some(session) = &self.session {
            let payload = SessionPayload {
                item: item.clone(),
                normalized: normalized.clone(),
            };
            if let Err(e) = session.save(&payload) {
                warn!("Failed to store selected item: {}", e);
            }
        }

        let rows = self.rows();
        surface.render_list(ListView::Rows {
            rows,
            selected: Some(index),
        });
        true
    }

    fn rows(&self) -> Vec<ListRow> {
        self.state
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| ListRow::new(index, &normalize_item(item)))
            .collect()
    }

    fn render_rows(&self, surface: &mut impl Surface) {
        if self.state.items.is_empty() {
            surface.render_list(ListView::Empty);
            return;
        }
        surface.render_list(ListView::Rows {
            rows: self.rows(),
            selected: None,
        });
        self.select(self.initial_row, surface);
    }

    fn show_failure(&self, surface: &mut impl Surface, message: &str) {
        surface.render_list(ListView::Failed);
        surface.set_summary(SUMMARY_FAILED);
        surface.set_status(message);
        surface.render_detail(DetailView::RequestFailed);
    }

    fn remember_url(&mut self, api_url: &str) {
        if let Some(preferences) = &mut self.preferences {
            if preferences.api_url() == Some(api_url) {
                return;
            }
            preferences.set_api_url(api_url);
            if let Err(e) = preferences.save() {
                warn!("Failed to save preferences: {}", e);
            }
        }
    }
}
