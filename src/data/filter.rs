use std::collections::BTreeMap;

use super::model::{Attribute, Bounds, ProductRecord, MODEL_KEY, SERIES_KEY};

/// Default number of rows shown in a report.
pub const DEFAULT_TOP_K: usize = 20;

/// Allowed range of the display cap.
pub const TOP_K_MIN: usize = 1;
pub const TOP_K_MAX: usize = 50;

// ---------------------------------------------------------------------------
// Filter request
// ---------------------------------------------------------------------------

/// Keyword, one inclusive range per attribute, and the display cap.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    /// Series/model keyword. Surrounding whitespace is ignored.
    pub keyword: String,
    pub bounds: BTreeMap<Attribute, Bounds>,
    pub top_k: usize,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            bounds: Attribute::ALL.iter().map(|&a| (a, a.range())).collect(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl FilterQuery {
    #[cfg(test)]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    #[cfg(test)]
    pub fn with_bounds(mut self, attr: Attribute, lo: f64, hi: f64) -> Self {
        self.bounds.insert(attr, Bounds::new(lo, hi));
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Bounds for `attr`; an attribute without an entry uses its full range.
    pub fn bounds_for(&self, attr: Attribute) -> Bounds {
        self.bounds.get(&attr).copied().unwrap_or_else(|| attr.range())
    }

    /// The trimmed keyword, or `None` when blank.
    pub fn active_keyword(&self) -> Option<&str> {
        let q = self.keyword.trim();
        (!q.is_empty()).then_some(q)
    }

    /// Whether `record` satisfies every attribute range.
    pub fn accepts(&self, record: &ProductRecord) -> bool {
        Attribute::ALL
            .iter()
            .all(|&attr| self.bounds_for(attr).contains(record.attribute_value(attr)))
    }
}

/// Raw, case-sensitive substring match on `series` or `model`.
pub fn matches_keyword(record: &ProductRecord, keyword: &str) -> bool {
    record.search_text(SERIES_KEY).contains(keyword)
        || record.search_text(MODEL_KEY).contains(keyword)
}

// ---------------------------------------------------------------------------
// Filter outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    /// The catalog is empty; nothing was filtered.
    NoData,
    /// The keyword matched no series or model. Holds the keyword as typed.
    NoKeywordMatch { keyword: String },
    /// Records survived the keyword stage (if any) but none fit the ranges.
    NoAttributeMatch { keyword: Option<String> },
    /// `shown` is the first `top_k` of `total` matches, in catalog order.
    Matches {
        total: usize,
        shown: Vec<&'a ProductRecord>,
    },
}

/// Run the keyword stage, then the attribute stage, then truncate.
///
/// `records` is only read; the result borrows from it in input order.
pub fn filter_products<'a>(records: &'a [ProductRecord], query: &FilterQuery) -> FilterOutcome<'a> {
    if records.is_empty() {
        return FilterOutcome::NoData;
    }

    let keyword = query.active_keyword();
    let base: Vec<&ProductRecord> = match keyword {
        Some(q) => {
            let hits: Vec<_> = records.iter().filter(|r| matches_keyword(r, q)).collect();
            if hits.is_empty() {
                return FilterOutcome::NoKeywordMatch {
                    keyword: query.keyword.clone(),
                };
            }
            hits
        }
        None => records.iter().collect(),
    };

    let mut result: Vec<&ProductRecord> = base.into_iter().filter(|r| query.accepts(r)).collect();

    if result.is_empty() {
        return FilterOutcome::NoAttributeMatch {
            keyword: keyword.map(|_| query.keyword.clone()),
        };
    }

    let total = result.len();
    result.truncate(query.top_k);
    FilterOutcome::Matches {
        total,
        shown: result,
    }
}
