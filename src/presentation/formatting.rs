//! Text shown around the timeline. Kept free of Leptos so it can be tested
//! natively.

use crate::application::TimelineView;
use crate::domain::gallery::SymbolSelector;

pub const EMPTY_TIMELINE_MESSAGE: &str = "No charts found";
pub const LOADING_MESSAGE: &str = "Loading charts…";

pub fn timeline_title(selector: SymbolSelector) -> String {
    format!("📊 {} Chart Timeline", selector.display_name())
}

/// Summaries rendered on one line, `"; "`-separated. `None` when there is
/// nothing to show.
pub fn summary_line(summaries: &[String]) -> Option<String> {
    let parts: Vec<&str> =
        summaries.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
    (!parts.is_empty()).then(|| parts.join("; "))
}

pub fn detail_toggle_label(count: usize) -> String {
    format!("Show Detailed Charts ({})", count)
}

pub fn image_alt(kind: &str, date: &str, index: Option<usize>) -> String {
    match index {
        Some(idx) => format!("{} {}-{}", kind, date, idx),
        None => format!("{} {}", kind, date),
    }
}

/// Message replacing the timeline, if any. Errors surface as an empty
/// timeline rather than a distinct error banner.
pub fn placeholder_message(view: &TimelineView) -> Option<&'static str> {
    match view {
        TimelineView::Idle | TimelineView::Loading => Some(LOADING_MESSAGE),
        TimelineView::Errored => Some(EMPTY_TIMELINE_MESSAGE),
        TimelineView::Ready(records) if records.is_empty() => Some(EMPTY_TIMELINE_MESSAGE),
        TimelineView::Ready(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_selector() {
        assert_eq!(timeline_title(SymbolSelector::Nifty), "📊 Nifty Chart Timeline");
        assert_eq!(timeline_title(SymbolSelector::All), "📊 All Symbols Chart Timeline");
    }

    #[test]
    fn summaries_join_with_semicolons() {
        let summaries = vec!["Gap up".to_string(), " ".to_string(), "Closed green".to_string()];
        assert_eq!(summary_line(&summaries).as_deref(), Some("Gap up; Closed green"));
        assert_eq!(summary_line(&[]), None);
    }

    #[test]
    fn detail_label_counts_images() {
        assert_eq!(detail_toggle_label(3), "Show Detailed Charts (3)");
    }

    #[test]
    fn alt_text_includes_index_for_details() {
        assert_eq!(image_alt("Overview", "2024-01-01", None), "Overview 2024-01-01");
        assert_eq!(image_alt("Detailed", "2024-01-01", Some(2)), "Detailed 2024-01-01-2");
    }

    #[test]
    fn errored_and_empty_views_show_empty_message() {
        assert_eq!(
            placeholder_message(&TimelineView::Errored),
            Some(EMPTY_TIMELINE_MESSAGE)
        );
        assert_eq!(
            placeholder_message(&TimelineView::Ready(Vec::new())),
            Some(EMPTY_TIMELINE_MESSAGE)
        );
        assert_eq!(placeholder_message(&TimelineView::Loading), Some(LOADING_MESSAGE));
    }
}
