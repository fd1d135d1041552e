use super::stat_card::StatCard;
use contracts::shared::indicators::*;
use leptos::prelude::*;
use std::collections::HashMap;

/// Grid of indicator cards; metadata fixes the order, values arrive per recompute
#[component]
pub fn IndicatorSetView(
    /// Cards in display order
    metas: Vec<IndicatorMeta>,
    /// Latest values keyed by indicator id string
    #[prop(into)]
    values: Signal<HashMap<String, IndicatorValue>>,
) -> impl IntoView {
    let cols_class = match metas.len() {
        0..=2 => "indicator-set__grid indicator-set__grid--cols-2",
        3 => "indicator-set__grid indicator-set__grid--cols-3",
        _ => "indicator-set__grid indicator-set__grid--cols-4",
    };

    let cards: Vec<_> = metas
        .into_iter()
        .map(|meta| {
            let id = meta.id.0.clone();
            let lookup = move |f: fn(&IndicatorValue) -> Option<f64>| {
                let id = id.clone();
                Signal::derive(move || values.with(|v| v.get(&id).and_then(f)))
            };

            let value_sig = lookup(|v| v.value);
            let target_sig = lookup(|v| v.target);

            let id = meta.id.0.clone();
            let status_sig = Signal::derive({
                let id = id.clone();
                move || {
                    values.with(|v| {
                        v.get(&id)
                            .map(|v| v.status)
                            .unwrap_or(IndicatorStatus::Neutral)
                    })
                }
            });
            let subtitle_sig =
                Signal::derive(move || values.with(|v| v.get(&id).and_then(|v| v.subtitle.clone())));

            view! {
                <StatCard
                    label=meta.label.clone()
                    icon_name=meta.icon.clone()
                    value=value_sig
                    format=meta.format.clone()
                    status=status_sig
                    target=target_sig
                    subtitle=subtitle_sig
                />
            }
        })
        .collect();

    view! {
        <div class="indicator-set">
            <div class=cols_class>
                {cards}
            </div>
        </div>
    }
}
