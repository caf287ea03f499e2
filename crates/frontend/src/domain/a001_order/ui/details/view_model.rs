//! ViewModel for Order details

use super::model::{fetch_feedbacks, fetch_submissions};
use super::state::{DetailsTab, FetchPlan, LazyList};
use contracts::domain::a001_order::dto::{FeedbackDto, OrderDto, SubmissionDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct OrderDetailsVm {
    pub order: Signal<OrderDto>,
    pub order_id: Memo<String>,
    pub active_tab: RwSignal<DetailsTab>,
    pub submissions: RwSignal<LazyList<SubmissionDto>>,
    pub reviews: RwSignal<LazyList<FeedbackDto>>,
}

impl OrderDetailsVm {
    pub fn new(order: Signal<OrderDto>) -> Self {
        Self {
            order,
            order_id: Memo::new(move |_| order.with(|o| o.id.to_string())),
            active_tab: RwSignal::new(DetailsTab::default()),
            submissions: RwSignal::new(LazyList::default()),
            reviews: RwSignal::new(LazyList::default()),
        }
    }

    pub fn set_tab(&self, tab: DetailsTab) {
        if self.active_tab.get_untracked() != tab {
            self.active_tab.set(tab);
        }
    }

    pub fn submissions_count(&self) -> Signal<Option<usize>> {
        let submissions = self.submissions;
        Signal::derive(move || submissions.with(|l| l.count()))
    }

    pub fn reviews_count(&self) -> Signal<Option<usize>> {
        let reviews = self.reviews;
        Signal::derive(move || reviews.with(|l| l.count()))
    }

    /// Runs on mount, on order change and on tab change
    pub fn sync(&self, tab: DetailsTab, order_id: String) {
        let reviews = self.reviews;
        let plan = self
            .submissions
            .try_update(|s| reviews.try_update(|r| FetchPlan::for_view(s, r, tab, &order_id)))
            .flatten()
            .unwrap_or_default();

        if plan.submissions {
            self.load_submissions(order_id.clone());
        }
        if plan.reviews {
            self.load_reviews(order_id);
        }
    }

    fn load_submissions(&self, order_id: String) {
        let submissions = self.submissions;
        spawn_local(async move {
            let items = match fetch_submissions(&order_id).await {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Failed to load submissions for order {}: {}", order_id, e);
                    Vec::new()
                }
            };
            // Owner may be gone by now; then the result is dropped
            let applied = submissions.try_update(|l| l.settle(&order_id, items));
            if applied != Some(true) {
                log::debug!("Discarded submissions response for order {}", order_id);
            }
        });
    }

    fn load_reviews(&self, order_id: String) {
        let reviews = self.reviews;
        spawn_local(async move {
            let items = match fetch_feedbacks(&order_id).await {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Failed to load feedbacks for order {}: {}", order_id, e);
                    Vec::new()
                }
            };
            let applied = reviews.try_update(|l| l.settle(&order_id, items));
            if applied != Some(true) {
                log::debug!("Discarded feedbacks response for order {}", order_id);
            }
        });
    }
}
