//! Query engine: search, sort and paginate the order store
//!
//! All functions are pure. `QueryState` is only mutated through its
//! methods, which reset the page to 1 whenever the search term or sort
//! changes.

use std::cmp::Ordering;

use crate::domain::{Order, OrderId};
use crate::store::OrderStore;

pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    User,
    Project,
    Address,
    Date,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Id,
        SortKey::User,
        SortKey::Project,
        SortKey::Address,
        SortKey::Date,
        SortKey::Status,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SortKey::Id => "Order ID",
            SortKey::User => "User",
            SortKey::Project => "Project",
            SortKey::Address => "Address",
            SortKey::Date => "Date",
            SortKey::Status => "Status",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "id" | "order" | "order-id" => Some(SortKey::Id),
            "user" | "name" => Some(SortKey::User),
            "project" => Some(SortKey::Project),
            "address" | "addr" => Some(SortKey::Address),
            "date" => Some(SortKey::Date),
            "status" => Some(SortKey::Status),
            _ => None,
        }
    }

    /// Chord key used after `s` in normal mode
    pub fn shortcut(&self) -> char {
        match self {
            SortKey::Id => 'i',
            SortKey::User => 'u',
            SortKey::Project => 'p',
            SortKey::Address => 'a',
            SortKey::Date => 'd',
            SortKey::Status => 't',
        }
    }

    pub fn from_shortcut(ch: char) -> Option<Self> {
        SortKey::ALL.into_iter().find(|key| key.shortcut() == ch)
    }

    fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            SortKey::Id => cmp_case_insensitive(a.id.as_str(), b.id.as_str()),
            SortKey::User => cmp_case_insensitive(&a.user.name, &b.user.name),
            SortKey::Project => cmp_case_insensitive(&a.project, &b.project),
            SortKey::Address => cmp_case_insensitive(&a.address, &b.address),
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Status => cmp_case_insensitive(a.status.label(), b.status.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search: String,
    sort: Option<SortKey>,
    direction: SortDirection,
    page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            direction: SortDirection::Ascending,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.page = 1;
        }
    }

    /// Same key flips direction, a new key starts ascending
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.sort = Some(key);
            self.direction = SortDirection::Ascending;
        }
        self.page = 1;
    }

    /// Ignored unless `page` is within `1..=total_pages`
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        if (1..=total_pages).contains(&page) {
            self.page = page;
        }
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

/// Derived view of the store for one query
#[derive(Debug, Clone)]
pub struct QueryView<'a> {
    pub matches: Vec<&'a Order>,
    pub page: usize,
    pub total_pages: usize,
    pub total_in_store: usize,
}

impl<'a> QueryView<'a> {
    pub fn page_rows(&self) -> &[&'a Order] {
        paginate(&self.matches, self.page)
    }

    pub fn visible_ids(&self) -> Vec<OrderId> {
        self.page_rows().iter().map(|order| order.id.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// 1-based index of the first row on the page, 0 when nothing shows
    pub fn first_shown(&self) -> usize {
        if self.page_rows().is_empty() {
            0
        } else {
            (self.page - 1) * PAGE_SIZE + 1
        }
    }

    pub fn last_shown(&self) -> usize {
        match self.first_shown() {
            0 => 0,
            first => first + self.page_rows().len() - 1,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn filter<'a>(orders: &'a [Order], term: &str) -> Vec<&'a Order> {
    let needle = term.to_lowercase();
    orders
        .iter()
        .filter(|order| order.matches_search(&needle))
        .collect()
}

pub fn sort(rows: &mut [&Order], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| key.compare(a, b));
    if direction == SortDirection::Descending {
        rows.reverse();
    }
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Out-of-range pages yield an empty slice
pub fn paginate<'r, T>(rows: &'r [T], page: usize) -> &'r [T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if page == 0 || start >= rows.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

pub fn run<'a>(store: &'a OrderStore, query: &QueryState) -> QueryView<'a> {
    let mut matches = filter(store.as_slice(), &query.search);
    if let Some(key) = query.sort {
        sort(&mut matches, key, query.direction);
    }
    let total_pages = total_pages(matches.len());
    QueryView {
        matches,
        page: query.page,
        total_pages,
        total_in_store: store.len(),
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
