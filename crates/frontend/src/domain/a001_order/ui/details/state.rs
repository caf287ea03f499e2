//! Tab and list state for Order details, kept free of signals so it can be unit-tested

/// Tabs of the details view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsTab {
    #[default]
    Submissions,
    Reviews,
}

impl DetailsTab {
    pub const ALL: [DetailsTab; 2] = [DetailsTab::Submissions, DetailsTab::Reviews];

    pub fn key(self) -> &'static str {
        match self {
            DetailsTab::Submissions => "submissions",
            DetailsTab::Reviews => "reviews",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailsTab::Submissions => "Submissions",
            DetailsTab::Reviews => "Reviews",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DetailsTab::Submissions => "upload",
            DetailsTab::Reviews => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing requested for the current order yet
    Idle,
    Loading,
    /// The request finished, successfully or not
    Settled,
}

/// What a list tab should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Items,
}

/// A list fetched at most once per order.
///
/// `begin` hands out the single request for an order, `settle` applies the
/// result only if the list still belongs to that order.
#[derive(Debug, Clone, PartialEq)]
pub struct LazyList<T> {
    order_id: Option<String>,
    status: ListStatus,
    items: Vec<T>,
}

impl<T> Default for LazyList<T> {
    fn default() -> Self {
        Self {
            order_id: None,
            status: ListStatus::Idle,
            items: Vec::new(),
        }
    }
}

impl<T> LazyList<T> {
    /// Returns `true` when the caller should issue the request for `order_id`.
    /// A different order drops the previous items.
    pub fn begin(&mut self, order_id: &str) -> bool {
        if self.order_id.as_deref() == Some(order_id) && self.status != ListStatus::Idle {
            return false;
        }
        self.order_id = Some(order_id.to_string());
        self.status = ListStatus::Loading;
        self.items.clear();
        true
    }

    /// Stores the result of the request for `order_id`.
    /// Returns `false` if the list has moved on to another order.
    pub fn settle(&mut self, order_id: &str, items: Vec<T>) -> bool {
        if self.order_id.as_deref() != Some(order_id) || self.status != ListStatus::Loading {
            return false;
        }
        self.items = items;
        self.status = ListStatus::Settled;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drops state that belongs to an order other than `order_id`
    pub fn retain_order(&mut self, order_id: &str) {
        if self.order_id.as_deref().is_some_and(|id| id != order_id) {
            self.reset();
        }
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Item count once the request has settled
    pub fn count(&self) -> Option<usize> {
        (self.status == ListStatus::Settled).then_some(self.items.len())
    }

    pub fn view(&self) -> ListView {
        match self.status {
            ListStatus::Idle | ListStatus::Loading => ListView::Loading,
            ListStatus::Settled if self.items.is_empty() => ListView::Empty,
            ListStatus::Settled => ListView::Items,
        }
    }
}

/// Requests the view has to issue after a tab or order change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchPlan {
    pub submissions: bool,
    pub reviews: bool,
}

impl FetchPlan {
    /// Submissions are loaded for every new order, reviews only while their
    /// tab is active. Reviews of a previous order are dropped.
    pub fn for_view<S, R>(
        submissions: &mut LazyList<S>,
        reviews: &mut LazyList<R>,
        tab: DetailsTab,
        order_id: &str,
    ) -> Self {
        reviews.retain_order(order_id);
        Self {
            submissions: submissions.begin(order_id),
            reviews: tab == DetailsTab::Reviews && reviews.begin(order_id),
        }
    }
}
