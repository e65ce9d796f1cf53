use std::fmt;

use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// Missing-value defaults
// ---------------------------------------------------------------------------

/// Value an absent or non-numeric attribute takes when compared to bounds.
pub const MISSING_NUMBER: f64 = 0.0;

/// Text an absent attribute is rendered as in the report.
pub const MISSING_PLACEHOLDER: &str = "?";

/// Report label for a record without a `series`.
pub const UNSPECIFIED_SERIES: &str = "unspecified series";

/// Report label for a record without a `model`.
pub const UNNAMED_MODEL: &str = "unnamed";

pub const SERIES_KEY: &str = "series";
pub const MODEL_KEY: &str = "model";

/// Convert a loosely typed JSON value to `f64`, falling back to `default`.
///
/// Numbers convert directly, strings are trimmed and parsed, booleans map to
/// 1.0 / 0.0. Everything else (absent, null, arrays, objects, unparsable
/// text) yields `default`.
pub fn to_number_or_default(value: Option<&JsonValue>, default: f64) -> f64 {
    match value {
        Some(JsonValue::Number(n)) => n.as_f64().unwrap_or(default),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().unwrap_or(default),
        Some(JsonValue::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => default,
    }
}

/// Render a scalar the way it reads in the catalog: strings without quotes,
/// everything else as its JSON text.
fn display_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// ProductRecord – one catalog entry
// ---------------------------------------------------------------------------

/// A single catalog entry, kept exactly as it was read.
///
/// The file is not validated per record, so the wrapped value may be any JSON
/// value. Accessors treat a non-object record like one with every key absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord(JsonValue);

impl ProductRecord {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Look up a key. `null` counts as absent.
    pub fn field(&self, key: &str) -> Option<&JsonValue> {
        self.0
            .as_object()
            .and_then(|obj| obj.get(key))
            .filter(|v| !v.is_null())
    }

    /// Display text for `key`, or `default` when absent.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.field(key)
            .map(display_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// Text searched by the keyword stage; absent fields search as "".
    pub fn search_text(&self, key: &str) -> String {
        self.text_or(key, "")
    }

    /// Numeric value of `key` for bound comparisons.
    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        to_number_or_default(self.field(key), default)
    }

    pub fn attribute_value(&self, attr: Attribute) -> f64 {
        self.number_or(attr.key(), MISSING_NUMBER)
    }

    /// Attribute as shown in the report: the raw value, or `?` when absent.
    pub fn attribute_text(&self, attr: Attribute) -> String {
        self.text_or(attr.key(), MISSING_PLACEHOLDER)
    }
}

// ---------------------------------------------------------------------------
// Attribute – the five numeric columns with range filters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Watt,
    Cct,
    Beam,
    Lumen,
    Price,
}

impl Attribute {
    /// Filter order, also the column order of the report.
    pub const ALL: [Attribute; 5] = [
        Attribute::Watt,
        Attribute::Cct,
        Attribute::Beam,
        Attribute::Lumen,
        Attribute::Price,
    ];

    /// JSON key of the attribute in a catalog record.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Watt => "watt",
            Attribute::Cct => "cct",
            Attribute::Beam => "beam",
            Attribute::Lumen => "lumen",
            Attribute::Price => "price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Watt => "Power",
            Attribute::Cct => "CCT",
            Attribute::Beam => "Beam",
            Attribute::Lumen => "Lumen",
            Attribute::Price => "Price",
        }
    }

    /// Suffix appended to the value in the report.
    pub fn unit(self) -> &'static str {
        match self {
            Attribute::Watt => "W",
            Attribute::Cct => "K",
            Attribute::Beam => "°",
            Attribute::Lumen => "lm",
            Attribute::Price => " NT$",
        }
    }

    /// Slider range, also the default filter bounds.
    pub fn range(self) -> Bounds {
        match self {
            Attribute::Watt => Bounds::new(0.0, 200.0),
            Attribute::Cct => Bounds::new(2000.0, 7000.0),
            Attribute::Beam => Bounds::new(0.0, 120.0),
            Attribute::Lumen => Bounds::new(0.0, 15000.0),
            Attribute::Price => Bounds::new(0.0, 200_000.0),
        }
    }

    pub fn step(self) -> f64 {
        match self {
            Attribute::Watt | Attribute::Beam => 1.0,
            Attribute::Cct => 50.0,
            Attribute::Lumen => 10.0,
            Attribute::Price => 100.0,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Bounds – inclusive numeric range
// ---------------------------------------------------------------------------

/// Inclusive `[lo, hi]` range. `lo <= hi` is expected, not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lo: f64,
    pub hi: f64,
}

impl Bounds {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}
