//! Summary grid - static order attributes

use crate::shared::date_utils::EMPTY_VALUE;
use contracts::domain::a001_order::dto::OrderDto;
use leptos::prelude::*;
use thaw::*;

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value.is_finite() => format!("${:.2}", value),
        _ => EMPTY_VALUE.to_string(),
    }
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "Yes" } else { "No" };
    text.to_string()
}

fn text_or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(EMPTY_VALUE)
        .to_string()
}

/// Label/value pairs in display order
pub fn summary_rows(order: &OrderDto) -> Vec<(&'static str, String)> {
    vec![
        ("Order", format!("#{}", order.id)),
        ("Writer", text_or_dash(order.writer_username.as_deref())),
        ("Pages", text_or_dash(order.order_pages_name.as_deref())),
        ("Urgency", text_or_dash(order.order_urgency_name.as_deref())),
        ("Style", text_or_dash(order.order_style_name.as_deref())),
        ("Language", text_or_dash(order.order_language_name.as_deref())),
        ("Priority", yes_no(order.priority)),
        ("Plagiarism report", yes_no(order.plagiarism)),
        ("Summary", yes_no(order.summary)),
        ("Quality check", yes_no(order.quality_check)),
        ("Draft", yes_no(order.draft)),
        ("SMS updates", yes_no(order.sms)),
        ("Sources", yes_no(order.sources)),
        ("Top writer", yes_no(order.top_writer)),
        ("Price", format_price(order.price)),
    ]
}

#[component]
pub fn SummaryPanel(#[prop(into)] order: Signal<OrderDto>) -> impl IntoView {
    view! {
        <Card>
            <h4 class="details-section__title">"Order summary"</h4>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: var(--spacing-sm);">
                {move || {
                    order
                        .with(summary_rows)
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="form__group">
                                    <label class="form__label">{label}</label>
                                    <div class="form__value">{value}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Card>
    }
}
