use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::{TransportError, TransportResult};
use crate::domain::gallery::value_objects::{PayloadShape, SymbolSelector};

/// Wire field names of a chart record.
pub const RECORD_FIELDS: [&str; 5] = ["overview", "detailed", "tags", "descriptions", "summaries"];

/// Entity - chart artifacts generated for one symbol on one date.
///
/// Every field is absent-safe: a missing, `null` or wrongly typed field
/// deserializes to its empty form instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolChartRecord {
    #[serde(default, deserialize_with = "lenient_path")]
    pub overview: Option<String>,
    #[serde(default, rename = "detailed", deserialize_with = "lenient_strings")]
    pub detail_images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_tag_set")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub descriptions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub summaries: Vec<String>,
}

impl SymbolChartRecord {
    /// Reads a record out of a JSON object, defaulting absent fields.
    /// Anything other than an object is rejected.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Object(_) => Self::deserialize(value).map_err(|e| e.to_string()),
            other => Err(format!("expected a chart record object, found {}", json_kind(other))),
        }
    }
}

fn lenient_path<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(path) if !path.trim().is_empty() => Some(path),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        Value::String(text) => vec![text],
        _ => Vec::new(),
    })
}

/// Tags form a set: duplicates are dropped, first occurrence wins.
fn lenient_tag_set<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut tags: Vec<String> = Vec::new();
    for tag in lenient_strings(deserializer)? {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Date key -> raw JSON value, in the order the backend sent them.
pub type DateEntries = Map<String, Value>;

/// Aggregate - the full result of one fetch, tagged with the shape the
/// selector that produced it implies.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSnapshot {
    /// date -> chart record
    Single(DateEntries),
    /// date -> symbol -> chart record
    Aggregate(DateEntries),
}

impl RawSnapshot {
    /// Wraps a decoded response body. The variant is picked from the
    /// selector alone; only the top level is required to be an object.
    pub fn from_json(selector: SymbolSelector, body: Value) -> TransportResult<Self> {
        match body {
            Value::Object(entries) => Ok(Self::with_entries(selector.expected_shape(), entries)),
            other => Err(TransportError::MalformedBody(format!(
                "expected an object keyed by date, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn empty(selector: SymbolSelector) -> Self {
        Self::with_entries(selector.expected_shape(), DateEntries::new())
    }

    fn with_entries(shape: PayloadShape, entries: DateEntries) -> Self {
        match shape {
            PayloadShape::SingleSymbol => Self::Single(entries),
            PayloadShape::Aggregate => Self::Aggregate(entries),
        }
    }

    pub fn shape(&self) -> PayloadShape {
        match self {
            Self::Single(_) => PayloadShape::SingleSymbol,
            Self::Aggregate(_) => PayloadShape::Aggregate,
        }
    }

    pub fn entries(&self) -> &DateEntries {
        match self {
            Self::Single(entries) | Self::Aggregate(entries) => entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// One symbol's artifacts inside an aggregate date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    pub symbol: String,
    pub record: SymbolChartRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "charts", rename_all = "snake_case")]
pub enum DateContent {
    Single(SymbolChartRecord),
    Aggregate(Vec<SymbolEntry>),
}

/// Render-ready view of one date. Derived fresh from the snapshot on every
/// build; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateViewRecord {
    pub date: String,
    pub content: DateContent,
}

impl DateViewRecord {
    pub fn single(&self) -> Option<&SymbolChartRecord> {
        match &self.content {
            DateContent::Single(record) => Some(record),
            DateContent::Aggregate(_) => None,
        }
    }

    pub fn symbols(&self) -> &[SymbolEntry] {
        match &self.content {
            DateContent::Single(_) => &[],
            DateContent::Aggregate(entries) => entries,
        }
    }
}
