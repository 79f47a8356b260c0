// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Filtered, paginated browsing of Transfer history.
//!
//! [`EventBrowser`] holds the two fetched histories and a [`ViewState`]. Every
//! call to [`EventBrowser::view`] derives a fresh [`BrowserView`] from them:
//!
//! 1. pick the history for the selected tab (or report loading/failure)
//! 2. keep the records matching the search term, in fetch order
//! 3. cut out the current page
//!
//! Nothing is cached between calls, so the view always reflects the latest
//! snapshot and state.
//!
//! ```rust
//! use transferscope::{EventBrowser, EventFeed, EventKind, FetchState};
//!
//! let mut browser = EventBrowser::new(EventFeed {
//!     token_events: FetchState::ready(vec![]),
//!     nft_events: FetchState::Pending,
//! });
//!
//! assert!(!browser.view().is_loading);
//! browser.set_event_kind(EventKind::Nft);
//! assert!(browser.view().is_loading);
//! ```

pub mod pagination;
pub mod row;
pub mod search;
pub mod state;

use serde::Serialize;

use crate::errors::BrowserError;
use crate::events::{EventKind, TransferEvent, TransferRecord};
use crate::explorer::BlockExplorer;
use crate::source::{EventFeed, FetchState};
use crate::wallet::{gate, Gate, WalletAccount};

pub use pagination::{page_range, total_pages, PageSize};
pub use row::EventRow;
pub use search::SearchQuery;
pub use state::ViewState;

/// Title of the events view
pub const EVENTS_TITLE: &str = "Contract Events";

/// Prompt shown instead of the events view when no wallet is connected
pub const CONNECT_PROMPT: &str = "Please connect your wallet to view events";

/// Why the table has no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyState {
    /// The contract has no history (or the page is past the end) and no search is set
    NoEvents(EventKind),
    /// A search term is set and nothing is on this page
    NoMatches,
}

impl EmptyState {
    /// Headline message
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoEvents(_) => "No events found",
            EmptyState::NoMatches => "No events match your search",
        }
    }

    /// Secondary hint
    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoEvents(kind) => kind.empty_hint(),
            EmptyState::NoMatches => "Try adjusting your search terms",
        }
    }
}

/// Everything the rendering layer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserView {
    /// Selected tab
    pub event_kind: EventKind,
    /// The selected history is still being fetched
    pub is_loading: bool,
    /// The selected history failed to load
    pub failure: Option<String>,
    /// Records on the current page
    pub page_slice: Vec<TransferEvent>,
    /// Records in the selected history
    pub total_count: usize,
    /// Records matching the search term
    pub filtered_count: usize,
    /// Pages of matching records
    pub total_pages: usize,
    /// 1-based current page
    pub current_page: usize,
    /// Rows per page
    pub page_size: PageSize,
    /// Search term as typed
    pub search_term: String,
    /// "Previous" enabled
    pub has_previous: bool,
    /// "Next" enabled
    pub has_next: bool,
    /// Set when a resolved history yields no rows on this page
    pub empty_state: Option<EmptyState>,
    /// Token tab counter
    pub token_count: usize,
    /// NFT tab counter
    pub nft_count: usize,
}

impl BrowserView {
    /// Page rows with list keys, formatted values and explorer links
    pub fn rows(&self, explorer: &BlockExplorer) -> Vec<EventRow> {
        self.page_slice
            .iter()
            .enumerate()
            .map(|(index, event)| EventRow::new(event, index, explorer))
            .collect()
    }
}

/// What the events screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserScreen {
    /// No wallet: show the connect prompt
    ConnectPrompt {
        /// Card title
        title: String,
        /// Prompt text
        message: String,
    },
    /// The event table
    Events(Box<BrowserView>),
}

/// Transfer history browser
#[derive(Debug, Clone, Default)]
pub struct EventBrowser {
    feed: EventFeed,
    state: ViewState,
}

impl EventBrowser {
    /// Browser over `feed` with fresh view state
    pub fn new(feed: EventFeed) -> Self {
        Self {
            feed,
            state: ViewState::default(),
        }
    }

    /// Replace the fetched histories, keeping the view state
    pub fn set_feed(&mut self, feed: EventFeed) {
        self.feed = feed;
    }

    /// Current fetched histories
    pub fn feed(&self) -> &EventFeed {
        &self.feed
    }

    /// Current view state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Select a tab; resets to page 1
    pub fn set_event_kind(&mut self, kind: EventKind) {
        self.state.set_event_kind(kind);
    }

    /// Set the search term; resets to page 1
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    /// Clear the search term; resets to page 1
    pub fn clear_search(&mut self) {
        self.state.clear_search();
    }

    /// Set rows per page from the selector value; resets to page 1
    pub fn set_page_size(&mut self, size: usize) -> Result<(), BrowserError> {
        self.state.try_set_page_size(size)
    }

    /// Jump to a page (at least 1); never clamped to the page count
    pub fn set_current_page(&mut self, page: usize) {
        self.state.set_current_page(page);
    }

    /// Go to the next page if "Next" is enabled
    pub fn next_page(&mut self) {
        let pages = self.view_counts().1;
        self.state.next_page(pages);
    }

    /// Go to the previous page if "Previous" is enabled
    pub fn previous_page(&mut self) {
        self.state.previous_page();
    }

    /// Token tab counter (0 until loaded)
    pub fn token_count(&self) -> usize {
        self.feed.token_events.len()
    }

    /// NFT tab counter (0 until loaded)
    pub fn nft_count(&self) -> usize {
        self.feed.nft_events.len()
    }

    /// The events screen, or a connect prompt when no wallet is connected
    pub fn screen<W: WalletAccount + ?Sized>(&self, wallet: &W) -> BrowserScreen {
        match gate(wallet, EVENTS_TITLE, CONNECT_PROMPT) {
            Gate::Connected(_) => BrowserScreen::Events(Box::new(self.view())),
            Gate::ConnectPrompt { title, message } => BrowserScreen::ConnectPrompt { title, message },
        }
    }

    /// Derive the current frame
    pub fn view(&self) -> BrowserView {
        let query = SearchQuery::new(self.state.search_term());
        let (fetch, page) = match self.state.event_kind() {
            EventKind::Token => derive(&self.feed.token_events, &query, &self.state),
            EventKind::Nft => derive(&self.feed.nft_events, &query, &self.state),
        };

        let total_pages = total_pages(page.filtered_count, self.state.page_size());
        let empty_state = match fetch {
            Fetch::Ready if page.slice.is_empty() => Some(if self.state.search_term().is_empty() {
                EmptyState::NoEvents(self.state.event_kind())
            } else {
                EmptyState::NoMatches
            }),
            _ => None,
        };
        let (is_loading, failure) = match fetch {
            Fetch::Pending => (true, None),
            Fetch::Failed(message) => (false, Some(message)),
            Fetch::Ready => (false, None),
        };

        BrowserView {
            event_kind: self.state.event_kind(),
            is_loading,
            failure,
            page_slice: page.slice,
            total_count: page.total_count,
            filtered_count: page.filtered_count,
            total_pages,
            current_page: self.state.current_page(),
            page_size: self.state.page_size(),
            search_term: self.state.search_term().to_string(),
            has_previous: self.state.has_previous(),
            has_next: self.state.has_next(total_pages),
            empty_state,
            token_count: self.token_count(),
            nft_count: self.nft_count(),
        }
    }

    /// `(filtered_count, total_pages)` of the selected history
    fn view_counts(&self) -> (usize, usize) {
        let query = SearchQuery::new(self.state.search_term());
        let filtered = match self.state.event_kind() {
            EventKind::Token => count_matches(&self.feed.token_events, &query),
            EventKind::Nft => count_matches(&self.feed.nft_events, &query),
        };
        (filtered, total_pages(filtered, self.state.page_size()))
    }
}

enum Fetch {
    Pending,
    Failed(String),
    Ready,
}

#[derive(Default)]
struct Page {
    slice: Vec<TransferEvent>,
    total_count: usize,
    filtered_count: usize,
}

fn derive<T>(events: &FetchState<T>, query: &SearchQuery, state: &ViewState) -> (Fetch, Page)
where
    T: TransferRecord + Clone + Into<TransferEvent>,
{
    let items = match events {
        FetchState::Pending => return (Fetch::Pending, Page::default()),
        FetchState::Failed(message) => return (Fetch::Failed(message.clone()), Page::default()),
        FetchState::Ready(items) => items,
    };

    let filtered = query.filter(items);
    let range = page_range(state.current_page(), state.page_size(), filtered.len());
    let slice = filtered[range].iter().map(|event| (*event).clone().into()).collect();

    (
        Fetch::Ready,
        Page {
            slice,
            total_count: items.len(),
            filtered_count: filtered.len(),
        },
    )
}

fn count_matches<T: TransferRecord>(events: &FetchState<T>, query: &SearchQuery) -> usize {
    events
        .items()
        .map_or(0, |items| items.iter().filter(|event| query.matches(*event)).count())
}
