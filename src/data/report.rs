use std::fmt;

use super::filter::FilterOutcome;
use super::model::{Attribute, ProductRecord, MODEL_KEY, SERIES_KEY, UNNAMED_MODEL, UNSPECIFIED_SERIES};

// ---------------------------------------------------------------------------
// Markdown rendering of a filter outcome
// ---------------------------------------------------------------------------

pub const NO_DATA_MESSAGE: &str = "⚠️ No product data loaded.";
pub const NO_ATTRIBUTE_MATCH_MESSAGE: &str = "❌ No products match the attribute ranges.";

/// One bullet line:
/// `- **Series: S** | Model: `M` | Power: 30W | CCT: 3000K | ...`
pub fn render_line(record: &ProductRecord) -> String {
    let mut line = format!(
        "- **Series: {}** | Model: `{}`",
        record.text_or(SERIES_KEY, UNSPECIFIED_SERIES),
        record.text_or(MODEL_KEY, UNNAMED_MODEL),
    );
    for attr in Attribute::ALL {
        line.push_str(&format!(
            " | {}: {}{}",
            attr.label(),
            record.attribute_text(attr),
            attr.unit()
        ));
    }
    line
}

impl FilterOutcome<'_> {
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn is_match(&self) -> bool {
        matches!(self, FilterOutcome::Matches { .. })
    }
}

impl fmt::Display for FilterOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOutcome::NoData => write!(f, "{NO_DATA_MESSAGE}"),
            FilterOutcome::NoKeywordMatch { keyword } => {
                write!(f, "❌ No series or model matches \"{keyword}\".")
            }
            FilterOutcome::NoAttributeMatch {
                keyword: Some(keyword),
            } => write!(
                f,
                "❌ No products under keyword \"{keyword}\" match the attribute ranges."
            ),
            FilterOutcome::NoAttributeMatch { keyword: None } => {
                write!(f, "{NO_ATTRIBUTE_MATCH_MESSAGE}")
            }
            FilterOutcome::Matches { total, shown } => {
                writeln!(f, "### Results: {total} found (showing {})", shown.len())?;
                for record in shown {
                    write!(f, "\n{}", render_line(record))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_products, FilterQuery};
    use serde_json::json;

    fn run_filter(records: &[ProductRecord], query: &FilterQuery) -> String {
        filter_products(records, query).render()
    }

    #[test]
    fn empty_catalog_reports_no_data() {
        assert_eq!(run_filter(&[], &FilterQuery::default()), NO_DATA_MESSAGE);
    }

    #[test]
    fn single_track_light_report() {
        let records = vec![ProductRecord::new(json!({
            "series": "Track-100", "model": "TR-1",
            "watt": 30, "cct": 3000, "beam": 24, "lumen": 2000, "price": 500
        }))];
        let report = run_filter(&records, &FilterQuery::default());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "### Results: 1 found (showing 1)");
        assert_eq!(lines[1], "");
        assert_eq!(
            lines[2],
            "- **Series: Track-100** | Model: `TR-1` | Power: 30W | CCT: 3000K | \
             Beam: 24° | Lumen: 2000lm | Price: 500 NT$"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn keyword_miss_names_keyword() {
        let records = vec![ProductRecord::new(json!({"series": "Track-100", "watt": 999}))];
        let query = FilterQuery::default().with_keyword("Panel");
        let report = run_filter(&records, &query);
        assert!(report.contains("\"Panel\""));
        assert!(report.contains("No series or model"));
    }

    #[test]
    fn attribute_miss_messages_differ_by_keyword() {
        let records = vec![ProductRecord::new(json!({"series": "Track-100", "watt": 999}))];
        let plain = run_filter(&records, &FilterQuery::default());
        assert_eq!(plain, NO_ATTRIBUTE_MATCH_MESSAGE);

        let keyed = run_filter(&records, &FilterQuery::default().with_keyword("Track"));
        assert!(keyed.contains("\"Track\""));
        assert_ne!(keyed, plain);
    }

    #[test]
    fn missing_values_render_as_placeholders() {
        let records = vec![ProductRecord::new(json!({"cct": 3000}))];
        let query = FilterQuery::default();
        let report = run_filter(&records, &query);
        let line = report.lines().last().unwrap();
        assert_eq!(
            line,
            "- **Series: unspecified series** | Model: `unnamed` | Power: ?W | CCT: 3000K | \
             Beam: ?° | Lumen: ?lm | Price: ? NT$"
        );
        assert!(!line.contains("0W"));
    }

    #[test]
    fn header_counts_total_and_displayed() {
        let records: Vec<_> = (0..30)
            .map(|i| ProductRecord::new(json!({"model": format!("M-{i}"), "cct": 4000})))
            .collect();
        let outcome = filter_products(&records, &FilterQuery::default());
        assert!(outcome.is_match());
        let report = outcome.render();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "### Results: 30 found (showing 20)");
        let rows: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(rows.len(), 20);
        assert!(rows[0].contains("`M-0`"));
        assert!(rows[19].contains("`M-19`"));
    }

    #[test]
    fn text_values_render_verbatim() {
        let records = vec![ProductRecord::new(json!({
            "series": "Panel", "model": "P-2", "watt": "36", "cct": "4000"
        }))];
        let report = run_filter(&records, &FilterQuery::default());
        assert!(report.contains("Power: 36W"));
        assert!(report.contains("CCT: 4000K"));
    }
}
