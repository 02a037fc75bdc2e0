use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One toast service for the whole app; every page reports through it.
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
