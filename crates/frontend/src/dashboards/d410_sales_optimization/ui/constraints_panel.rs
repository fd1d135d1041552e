use contracts::dashboards::d410_sales_optimization::{ConstraintBounds, SliderSpec, SliderUnit};
use leptos::prelude::*;

use crate::shared::components::table::{format_money, format_number_with_decimals};
use crate::shared::icons::icon;

/// Text shown next to a widget for its current widget value
fn widget_label(unit: SliderUnit, widget_value: f64) -> String {
    match unit {
        SliderUnit::Percent => format!("{}%", format_number_with_decimals(widget_value, 0)),
        SliderUnit::Money => format_money(widget_value),
    }
}

/// Parse raw input text into the bound for `spec`; `None` when it is not a
/// number or falls outside the widget domain
fn parse_widget_input(spec: &SliderSpec, raw: &str) -> Option<f64> {
    let widget_value = raw.trim().parse::<f64>().ok()?;
    let bound = spec.unit.to_bound(widget_value);
    spec.accepts(bound).then_some(bound)
}

/// Sidebar "Adjust Constraints": one widget per slider, each writing
/// its field of `bounds`
#[component]
pub fn ConstraintsPanel(
    sliders: Vec<SliderSpec>,
    bounds: RwSignal<ConstraintBounds>,
) -> impl IntoView {
    let widgets = sliders
        .into_iter()
        .map(|spec| {
            let field = spec.field;
            let unit = spec.unit;
            let widget_value = move || unit.to_widget(bounds.with(|b| b.get(field)));
            let input_type = match unit {
                SliderUnit::Percent => "range",
                SliderUnit::Money => "number",
            };

            let on_input = {
                let spec = spec.clone();
                move |ev: leptos::ev::Event| {
                    let raw = event_target_value(&ev);
                    match parse_widget_input(&spec, &raw) {
                        Some(bound) => bounds.update(|b| b.set(field, bound)),
                        None => log::warn!("Ignoring {:?} input '{}'", field, raw),
                    }
                }
            };

            view! {
                <div class="constraints-panel__item">
                    <label class="constraints-panel__label">
                        <span>{spec.label.clone()}</span>
                        <span class="constraints-panel__value">
                            {move || widget_label(unit, widget_value())}
                        </span>
                    </label>
                    <input
                        class="constraints-panel__input"
                        type=input_type
                        min=spec.min
                        max=spec.max
                        step=spec.step
                        prop:value=move || widget_value().to_string()
                        on:change=on_input
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <aside class="constraints-panel">
            <h3 class="constraints-panel__title">{icon("sliders")}"Adjust Constraints"</h3>
            {widgets}
            <button
                class="button button--secondary constraints-panel__reset"
                on:click=move |_| bounds.set(ConstraintBounds::default())
            >
                "Reset to defaults"
            </button>
        </aside>
    }
}
