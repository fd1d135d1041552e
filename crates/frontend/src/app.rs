use crate::dashboards::SalesOptimizationDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SalesOptimizationDashboard />
    }
}
