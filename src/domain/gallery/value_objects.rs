use chrono::{DateTime, NaiveDate};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - which instrument (or all of them) the dashboard shows.
///
/// Wire names are lower-case; parsing accepts any case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSelector {
    #[default]
    Nifty,
    BankNifty,
    FinNifty,
    Sensex,
    All,
}

impl SymbolSelector {
    /// Path segment used in `GET <base>/charts/<selector>`.
    pub fn as_path(&self) -> &str {
        self.as_ref()
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The payload shape a fetch for this selector must produce.
    pub fn expected_shape(&self) -> PayloadShape {
        if self.is_aggregate() {
            PayloadShape::Aggregate
        } else {
            PayloadShape::SingleSymbol
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Nifty => "Nifty",
            Self::BankNifty => "Bank Nifty",
            Self::FinNifty => "Fin Nifty",
            Self::Sensex => "Sensex",
            Self::All => "All Symbols",
        }
    }
}

/// Payload layout under each date key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadShape {
    #[display(fmt = "single-symbol")]
    SingleSymbol,
    #[display(fmt = "aggregate")]
    Aggregate,
}

/// Value Object - a snapshot date key together with its parsed calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDate<'a> {
    key: &'a str,
    date: Option<NaiveDate>,
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

impl<'a> ChartDate<'a> {
    pub fn parse(key: &'a str) -> Self {
        Self { key, date: parse_calendar_date(key) }
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Timeline order: newest calendar date first, unparsable keys last.
    /// Equal dates and unparsable keys fall back to the raw key so the order
    /// stays total. Two keys naming the same day (`2024-01-02`, `2024/01/02`)
    /// are both kept, adjacent, ascending by key.
    pub fn timeline_cmp(&self, other: &Self) -> Ordering {
        match (self.date, other.date) {
            (Some(a), Some(b)) => b.cmp(&a).then_with(|| self.key.cmp(other.key)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.key.cmp(other.key),
        }
    }
}

fn parse_calendar_date(key: &str) -> Option<NaiveDate> {
    let trimmed = key.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
}
