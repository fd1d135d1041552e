use leptos::prelude::*;

/// Dashboard title block with an optional description line and action slot
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    description: Option<String>,

    /// Right-aligned actions (status badges, buttons)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {description.map(|d| view! {
                        <div class="page-header__subtitle">{d}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
