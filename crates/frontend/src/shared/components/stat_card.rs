use super::table::number_format::{format_money, format_number_int, format_number_with_decimals};
use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } if currency == "$" => format_money(val),
        ValueFormat::Money { currency } => format!("{} {}", format_number_int(val), currency),
        ValueFormat::Percent { decimals } => {
            format!("{}%", format_number_with_decimals(val, *decimals))
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = loading/unavailable)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value and the target
    format: ValueFormat,
    /// Visual status
    #[prop(into)]
    status: Signal<IndicatorStatus>,
    /// Target the value is measured against
    #[prop(into)]
    target: Signal<Option<f64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let format_value_clone = format.clone();
    let format_target_clone = format;

    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format_value_clone),
        None => "—".to_string(),
    };

    let target_view = move || {
        target.get().map(|t| {
            let text = format!("target {}", format_value(t, &format_target_clone));
            view! { <span class="stat-card__target">{text}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                </div>
                {target_view}
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        let usd = ValueFormat::Money {
            currency: "$".to_string(),
        };
        assert_eq!(format_value(37_000_000.0, &usd), "$37,000,000");
        assert_eq!(format_value(-2_500.4, &usd), "-$2,500");
        assert_eq!(
            format_value(1500.0, &ValueFormat::Money { currency: "EUR".to_string() }),
            "1,500 EUR"
        );
        assert_eq!(format_value(3.14159, &ValueFormat::Percent { decimals: 2 }), "3.14%");
    }
}
