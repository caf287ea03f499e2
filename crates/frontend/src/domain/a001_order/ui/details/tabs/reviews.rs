//! Reviews tab - client feedback, fetched on first open

use super::super::record_list::{RecordCard, RecordList};
use super::super::view_model::OrderDetailsVm;
use leptos::prelude::*;

#[component]
pub fn ReviewsTab(vm: OrderDetailsVm) -> impl IntoView {
    let reviews = vm.reviews;
    let state = Signal::derive(move || reviews.with(|l| l.view()));
    let cards = Signal::derive(move || {
        reviews.with(|l| l.items().iter().map(RecordCard::from_feedback).collect::<Vec<_>>())
    });

    view! {
        <RecordList
            state=state
            cards=cards
            loading_text="Loading reviews..."
            empty_text="No reviews yet."
        />
    }
}
