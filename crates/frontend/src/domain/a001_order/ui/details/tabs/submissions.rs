//! Submissions tab - deliverables uploaded by the writer

use super::super::record_list::{RecordCard, RecordList};
use super::super::view_model::OrderDetailsVm;
use leptos::prelude::*;

#[component]
pub fn SubmissionsTab(vm: OrderDetailsVm) -> impl IntoView {
    let submissions = vm.submissions;
    let state = Signal::derive(move || submissions.with(|l| l.view()));
    let cards = Signal::derive(move || {
        submissions.with(|l| {
            l.items()
                .iter()
                .enumerate()
                .map(|(i, s)| RecordCard::from_submission(i, s))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <RecordList
            state=state
            cards=cards
            loading_text="Loading submissions..."
            empty_text="No submissions yet."
        />
    }
}
