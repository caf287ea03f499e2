//! Order details view: summary grid plus submissions / reviews tabs

use super::state::DetailsTab;
use super::summary::SummaryPanel;
use super::tabs::{ReviewsTab, SubmissionsTab};
use super::view_model::OrderDetailsVm;
use crate::shared::icons::icon;
use contracts::domain::a001_order::dto::OrderDto;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetails(#[prop(into)] order: Signal<OrderDto>) -> impl IntoView {
    let vm = OrderDetailsVm::new(order);

    // Mount, order change and tab change
    Effect::new(move || {
        let tab = vm.active_tab.get();
        let order_id = vm.order_id.get();
        vm.sync(tab, order_id);
    });

    view! {
        <div class="order-details">
            <SummaryPanel order=order />

            <div class="tabs__content" style="margin-top: var(--spacing-md);">
                <TabBar vm=vm />
                <TabContent vm=vm />
            </div>
        </div>
    }
}

#[component]
fn TabBar(vm: OrderDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;
    let submissions_count = vm.submissions_count();
    let reviews_count = vm.reviews_count();

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
        >
            {DetailsTab::ALL
                .into_iter()
                .map(|tab| {
                    let count = match tab {
                        DetailsTab::Submissions => submissions_count,
                        DetailsTab::Reviews => reviews_count,
                    };
                    view! {
                        <Button
                            appearance=Signal::derive(move || {
                                if active_tab.get() == tab {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            size=ButtonSize::Small
                            on_click=move |_| vm.set_tab(tab)
                        >
                            <span class="tab-icon">{icon(tab.icon())}</span>
                            {tab.label()}
                            {move || count.get().map(|n| view! {
                                <Badge
                                    appearance=BadgeAppearance::Tint
                                    color=Signal::derive(move || {
                                        if active_tab.get() == tab {
                                            BadgeColor::Brand
                                        } else {
                                            BadgeColor::Informative
                                        }
                                    })
                                    attr:style="margin-left: 6px;"
                                >
                                    {n.to_string()}
                                </Badge>
                            })}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}

#[component]
fn TabContent(vm: OrderDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        {move || match active_tab.get() {
            DetailsTab::Submissions => view! { <SubmissionsTab vm=vm /> }.into_any(),
            DetailsTab::Reviews => view! { <ReviewsTab vm=vm /> }.into_any(),
        }}
    }
}
