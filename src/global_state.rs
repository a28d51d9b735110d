use crate::application::TimelineView;
use crate::domain::gallery::SymbolSelector;
use leptos::*;
use once_cell::sync::OnceCell;

/// Signals shared by the dashboard components.
pub struct Globals {
    pub active_selector: RwSignal<SymbolSelector>,
    pub timeline: RwSignal<TimelineView>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        active_selector: create_rw_signal(SymbolSelector::default()),
        timeline: create_rw_signal(TimelineView::Idle),
    })
}

crate::global_signals! {
    pub active_selector => active_selector: SymbolSelector,
    pub timeline_view => timeline: TimelineView,
}
