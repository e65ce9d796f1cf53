use std::path::Path;

use crate::data::filter::{filter_products, FilterQuery};
use crate::data::loader::{load_products, LoadStatus};
use crate::data::model::ProductRecord;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Catalog read once at startup; never modified afterwards.
    pub records: Vec<ProductRecord>,

    /// Outcome of the startup load, shown in the top bar.
    pub load_status: LoadStatus,

    /// Current form values.
    pub query: FilterQuery,

    /// Initial top-K, restored by [`AppState::reset_query`].
    pub default_top_k: usize,

    /// Last rendered report (None until the user filters).
    pub output: Option<String>,
}

impl AppState {
    pub fn new(records: Vec<ProductRecord>, load_status: LoadStatus) -> Self {
        let query = FilterQuery::default();
        Self {
            records,
            load_status,
            default_top_k: query.top_k,
            query,
            output: None,
        }
    }

    /// Read the catalog at `path`. Failures leave the state with no records.
    pub fn load(path: &Path) -> Self {
        let (records, status) = load_products(path);
        Self::new(records, status)
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.default_top_k = top_k;
        self.query.top_k = top_k;
        self
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Run the current query and keep the rendered report.
    pub fn apply_filter(&mut self) {
        let outcome = filter_products(&self.records, &self.query);
        log::debug!(
            "filter keyword={:?} top_k={} matched={}",
            self.query.keyword,
            self.query.top_k,
            outcome.is_match()
        );
        self.output = Some(outcome.render());
    }

    /// Restore the form to its startup values and clear the report.
    pub fn reset_query(&mut self) {
        self.query = FilterQuery::default().with_top_k(self.default_top_k);
        self.output = None;
    }
}
