use crate::domain::a001_order::ui::details::OrderDetailsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="page">
            <p>"Open /orders/<id> to see an order."</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/orders/:id") view=OrderDetailsPage />
                </Routes>
            </main>
        </Router>
    }
}
