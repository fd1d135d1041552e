//! PageFrame: standard root wrapper for every dashboard page.
//!
//! Sets the root `id` in the form `"{dashboard}--dashboard"`, e.g.
//! `"d410_sales_optimization--dashboard"`, so the DOM id can be pasted into
//! IDE search to land in the matching module.

use leptos::prelude::*;

/// Root wrapper that sets standard metadata on the page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{dashboard}--dashboard`.
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page page--dashboard".to_string()
    } else {
        format!("page page--dashboard {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category="dashboard">
            {children()}
        </div>
    }
}
