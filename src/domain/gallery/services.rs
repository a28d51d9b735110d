use serde_json::{Map, Value};
use std::str::FromStr;

use crate::domain::errors::ShapeMismatchError;
use crate::domain::gallery::entities::{
    DateContent, DateViewRecord, RECORD_FIELDS, RawSnapshot, SymbolChartRecord, SymbolEntry,
    json_kind,
};
use crate::domain::gallery::value_objects::{ChartDate, PayloadShape, SymbolSelector};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::log_warn;

/// Domain service - turns a raw snapshot into the ordered timeline.
///
/// Stateless: every call reads only its inputs, so repeated calls with the
/// same snapshot and selector return equal sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewModelBuilder;

impl ViewModelBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds one record per surviving date, newest first.
    ///
    /// The selector alone decides how each date's value is read. Dates whose
    /// value is `null` are dropped silently; dates whose value has the wrong
    /// shape are dropped and reported at warn level.
    pub fn build(&self, snapshot: &RawSnapshot, selector: SymbolSelector) -> Vec<DateViewRecord> {
        let expected = selector.expected_shape();
        if snapshot.shape() != expected {
            log_warn!(
                LogComponent::Domain("ViewModel"),
                "Snapshot holds {} data but {} expects {} data; nothing to show",
                snapshot.shape(),
                selector,
                expected
            );
            return Vec::new();
        }

        let mut dates: Vec<ChartDate<'_>> =
            snapshot.entries().keys().map(|key| ChartDate::parse(key)).collect();
        dates.sort_by(|a, b| a.timeline_cmp(b));

        dates
            .into_iter()
            .filter_map(|date| {
                let value = snapshot.entries().get(date.key())?;
                match self.read_date(date.key(), value, expected) {
                    Ok(content) => Some(DateViewRecord {
                        date: date.key().to_string(),
                        content: content?,
                    }),
                    Err(mismatch) => {
                        report_mismatch(&mismatch);
                        None
                    }
                }
            })
            .collect()
    }

    /// `Ok(None)` means the date carries no value and contributes nothing.
    fn read_date(
        &self,
        date: &str,
        value: &Value,
        shape: PayloadShape,
    ) -> Result<Option<DateContent>, ShapeMismatchError> {
        if value.is_null() {
            return Ok(None);
        }
        let mismatch = |reason: String| ShapeMismatchError {
            date: date.to_string(),
            expected: shape,
            reason,
        };

        match shape {
            PayloadShape::SingleSymbol => {
                if let Value::Object(fields) = value {
                    if looks_like_symbol_mapping(fields) {
                        return Err(mismatch("found a per-symbol mapping".to_string()));
                    }
                }
                let record = SymbolChartRecord::from_value(value).map_err(mismatch)?;
                Ok(Some(DateContent::Single(record)))
            }
            PayloadShape::Aggregate => {
                let Value::Object(symbols) = value else {
                    return Err(mismatch(format!(
                        "expected a per-symbol mapping, found {}",
                        json_kind(value)
                    )));
                };
                if looks_like_flat_record(symbols) {
                    return Err(mismatch("found a flat record".to_string()));
                }
                let entries = symbols
                    .iter()
                    .filter_map(|(symbol, raw)| read_symbol_entry(date, symbol, raw))
                    .collect();
                Ok(Some(DateContent::Aggregate(entries)))
            }
        }
    }
}

/// Single-symbol records are objects keyed by the known record fields. An
/// object with none of those keys, whose values are all objects and which is
/// keyed by selectors or holds nested chart records, is a symbol -> record
/// mapping sent where a flat record was expected.
fn looks_like_symbol_mapping(fields: &Map<String, Value>) -> bool {
    if fields.is_empty() || has_record_field(fields) {
        return false;
    }
    let mut nested = Vec::with_capacity(fields.len());
    for value in fields.values() {
        match value {
            Value::Object(inner) => nested.push(inner),
            _ => return false,
        }
    }
    fields.keys().any(|key| SymbolSelector::from_str(key).is_ok())
        || nested.into_iter().any(has_record_field)
}

/// A per-symbol mapping never carries record fields at its top level, and
/// at least one of its entries is an object or `null`.
fn looks_like_flat_record(symbols: &Map<String, Value>) -> bool {
    has_record_field(symbols)
        || (!symbols.is_empty()
            && symbols
                .values()
                .all(|value| !value.is_object() && !value.is_null()))
}

fn has_record_field(fields: &Map<String, Value>) -> bool {
    fields
        .keys()
        .any(|key| RECORD_FIELDS.contains(&key.as_str()))
}

fn read_symbol_entry(date: &str, symbol: &str, raw: &Value) -> Option<SymbolEntry> {
    if raw.is_null() {
        return None;
    }
    match SymbolChartRecord::from_value(raw) {
        Ok(record) => Some(SymbolEntry { symbol: symbol.to_string(), record }),
        Err(reason) => {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Domain("ViewModel"),
                &format!("Skipping symbol '{}': {}", symbol, reason),
                date,
            );
            None
        }
    }
}

fn report_mismatch(mismatch: &ShapeMismatchError) {
    get_logger().log_with_metadata(
        LogLevel::Warn,
        LogComponent::Domain("ViewModel"),
        &mismatch.to_string(),
        &mismatch.date,
    );
}
