//! Job listing search over public open-data APIs, plus a lottery picker.
//!
//! The pipeline for one page of results:
//! - [`request::SearchForm`] builds the request URL
//! - a [`fetch::Fetcher`] returns the body as a generic value, XML bodies
//!   going through [`xml::parse_xml_items`]
//! - [`extract`] finds the items and the total count
//! - [`normalize::normalize_item`] and [`detail::build_detail_list`] produce
//!   what the list and detail views show
//!
//! [`board::Board`] ties these together behind a rendering [`board::Surface`].

pub mod board;
pub mod detail;
pub mod extract;
pub mod fetch;
pub mod lotto;
pub mod normalize;
pub mod pick;
pub mod request;
pub mod store;
pub mod theme;
pub mod xml;

pub use board::{Board, DetailPage, DetailView, ListRow, ListView, PageState, Surface};
pub use detail::{DetailEntry, build_detail_list};
pub use extract::{extract_items, extract_total_count};
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use normalize::{NormalizedItem, normalize_item};
pub use pick::pick_first;
pub use request::SearchForm;
pub use store::{Preferences, SessionLoad, SessionPayload, SessionStore, StoragePaths};
pub use theme::Theme;
pub use xml::parse_xml_items;
