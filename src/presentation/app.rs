use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{TimelineService, TimelineView},
    domain::{
        gallery::{DateContent, DateViewRecord, SymbolChartRecord, SymbolSelector},
        logging::{LogComponent, get_logger},
    },
    global_state::{active_selector, timeline_view},
    infrastructure::{ChartApiClient, config},
    presentation::formatting::{
        detail_toggle_label, image_alt, placeholder_message, summary_line, timeline_title,
    },
};

const STYLES: &str = r#"
.chart-timeline-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: #f9fafb;
    min-height: 100vh;
    padding: 24px;
}
.header h1 { font-size: 30px; font-weight: 700; text-align: center; margin-bottom: 16px; }
.symbol-picker { display: flex; justify-content: center; gap: 8px; margin-bottom: 24px; }
.symbol-picker button {
    border: 1px solid #d1d5db; background: white; border-radius: 9999px;
    padding: 6px 14px; cursor: pointer;
}
.symbol-picker button.active { background: #1e40af; color: white; border-color: #1e40af; }
.status { color: #6b7280; text-align: center; }
.timeline { display: flex; flex-direction: column; gap: 24px; }
.date-card {
    background: white; border: 1px solid #e5e7eb; border-radius: 16px;
    padding: 16px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
}
.date-heading { font-size: 20px; font-weight: 600; margin-bottom: 8px; }
.symbol-name { font-size: 16px; font-weight: 600; margin: 12px 0 6px; }
.tags { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 8px; }
.tag { background: #dbeafe; color: #1e40af; padding: 2px 8px; border-radius: 9999px; font-size: 14px; }
.descriptions { list-style: disc inside; color: #4b5563; margin-bottom: 12px; }
.label { color: #4b5563; font-weight: 500; margin-bottom: 4px; }
.chart-image { border-radius: 12px; max-height: 16rem; width: 100%; object-fit: contain; }
.detailed summary { cursor: pointer; color: #2563eb; font-weight: 500; }
.detail-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px; margin-top: 12px; }
.summary { margin-top: 8px; color: #374151; font-size: 14px; }
"#;

/// Root component: owns the timeline service and kicks off the first fetch.
#[component]
pub fn App() -> impl IntoView {
    let settings = config();
    let service = store_value(TimelineService::new(
        ChartApiClient::new(settings.clone()),
        settings.default_selector(),
    ));

    let select = move |selector: SymbolSelector| {
        let service = service.get_value();
        let ticket = service.begin(selector);
        active_selector().set(selector);
        timeline_view().set(service.view());

        spawn_local(async move {
            if service.complete(ticket).await {
                timeline_view().set(service.view());
            } else {
                get_logger().debug(
                    LogComponent::Presentation("App"),
                    &format!("Ignoring superseded response for '{}'", ticket.selector),
                );
            }
        });
    };

    select(settings.default_selector());

    view! {
        <style>{STYLES}</style>
        <div class="chart-timeline-app">
            <Header />
            <SymbolPicker on_select=select />
            <Timeline />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let selector = active_selector();

    view! {
        <header class="header">
            <h1>{move || timeline_title(selector.get())}</h1>
        </header>
    }
}

#[component]
fn SymbolPicker(#[prop(into)] on_select: Callback<SymbolSelector>) -> impl IntoView {
    let active = active_selector();

    view! {
        <nav class="symbol-picker">
            {SymbolSelector::iter()
                .map(|selector| {
                    view! {
                        <button
                            class:active=move || active.get() == selector
                            on:click=move |_| on_select.call(selector)
                        >
                            {selector.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Loading / empty placeholder, or one card per date.
#[component]
fn Timeline() -> impl IntoView {
    let timeline = timeline_view();

    move || {
        let current = timeline.get();
        if let Some(message) = placeholder_message(&current) {
            return view! { <p class="status">{message}</p> }.into_view();
        }
        let cards = match current {
            TimelineView::Ready(records) => records
                .into_iter()
                .map(|record| view! { <DateCard record=record /> })
                .collect_view(),
            _ => ().into_view(),
        };
        view! { <div class="timeline">{cards}</div> }.into_view()
    }
}

#[component]
fn DateCard(record: DateViewRecord) -> impl IntoView {
    let DateViewRecord { date, content } = record;

    let body = match content {
        DateContent::Single(chart) => {
            view! { <ChartRecordView date=date.clone() chart=chart /> }.into_view()
        }
        DateContent::Aggregate(entries) => entries
            .into_iter()
            .map(|entry| {
                view! {
                    <section class="symbol-section">
                        <h3 class="symbol-name">{entry.symbol.to_uppercase()}</h3>
                        <ChartRecordView date=date.clone() chart=entry.record />
                    </section>
                }
            })
            .collect_view(),
    };

    view! {
        <article class="date-card">
            <h2 class="date-heading">{date}</h2>
            {body}
        </article>
    }
}

#[component]
fn ChartRecordView(date: String, chart: SymbolChartRecord) -> impl IntoView {
    let settings = config();
    let SymbolChartRecord { overview, detail_images, tags, descriptions, summaries } = chart;
    let detail_count = detail_images.len();
    let summary = summary_line(&summaries);

    let tags_view = (!tags.is_empty()).then(|| {
        view! {
            <div class="tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect_view()}
            </div>
        }
    });

    let descriptions_view = (!descriptions.is_empty()).then(|| {
        view! {
            <ul class="descriptions">
                {descriptions.into_iter().map(|text| view! { <li>{text}</li> }).collect_view()}
            </ul>
        }
    });

    let overview_view = overview.map(|path| {
        view! {
            <div class="overview">
                <p class="label">"Overview"</p>
                <img
                    src=settings.image_url(&path)
                    alt=image_alt("Overview", &date, None)
                    class="chart-image"
                />
            </div>
        }
    });

    let details_view = (detail_count > 0).then(|| {
        view! {
            <details class="detailed">
                <summary>{detail_toggle_label(detail_count)}</summary>
                <div class="detail-grid">
                    {detail_images
                        .into_iter()
                        .enumerate()
                        .map(|(idx, path)| {
                            view! {
                                <img
                                    src=settings.image_url(&path)
                                    alt=image_alt("Detailed", &date, Some(idx))
                                    class="chart-image"
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </details>
        }
    });

    let summary_view = summary.map(|line| {
        view! {
            <div class="summary">
                <strong>"Summary:"</strong>
                " "
                {line}
            </div>
        }
    });

    view! {
        <div class="chart-record">
            {tags_view}
            {descriptions_view}
            {overview_view}
            {details_view}
            {summary_view}
        </div>
    }
}
