use crate::layout::sidebar::Sidebar;
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Application frame: navigation on the left, the routed page on the right.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <main class="shell__content">
                <Outlet />
            </main>
        </div>
    }
}
