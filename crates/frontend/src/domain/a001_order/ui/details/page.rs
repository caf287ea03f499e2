//! Routed page: loads the order by id and hosts the details view

use super::model::fetch_order;
use super::view::OrderDetails;
use contracts::domain::a001_order::dto::OrderDto;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let route_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    let order: RwSignal<Option<OrderDto>> = RwSignal::new(None);
    let loading = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let has_order = Memo::new(move |_| order.with(Option::is_some));
    let has_error = Memo::new(move |_| error.with(Option::is_some));

    Effect::new(move || {
        let id = route_id.get();
        if id.is_empty() {
            return;
        }
        loading.set(true);
        if error.get_untracked().is_some() {
            error.set(None);
        }

        spawn_local(async move {
            let result = fetch_order(&id).await;
            // Route may have moved on while the request was in flight
            if route_id.try_get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }
            match result {
                Ok(data) => {
                    let _ = order.try_set(Some(data));
                }
                Err(e) => {
                    log::error!("Failed to load order {}: {}", id, e);
                    let _ = order.try_set(None);
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = loading.try_set(false);
        });
    });

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{move || format!("Order #{}", route_id.get())}</h2>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    // Only flips of these memos rebuild the branch
                    if has_error.get() {
                        view! {
                            <div style="padding: var(--spacing-lg); background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: var(--radius-sm); color: var(--color-error); margin: var(--spacing-lg);">
                                <strong>"Error: "</strong>{move || error.get().unwrap_or_default()}
                            </div>
                        }
                        .into_any()
                    } else if has_order.get() {
                        // Stays mounted across route changes, the view refetches on a new id
                        let current = Signal::derive(move || {
                            order
                                .get()
                                .unwrap_or_else(|| OrderDto::new(route_id.get_untracked().as_str()))
                        });
                        view! { <OrderDetails order=current /> }.into_any()
                    } else {
                        view! {
                            <Show
                                when=move || loading.get()
                                fallback=|| view! { <div>"No data"</div> }
                            >
                                <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                                    <Spinner />
                                    <span>"Loading order..."</span>
                                </Flex>
                            </Show>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
