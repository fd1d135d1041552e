use contracts::dashboards::d410_sales_optimization::{
    ConstraintBounds, ConstraintCatalog, OptimizationResponse, SalesProjection,
};
use contracts::shared::indicators::IndicatorValue;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

use super::charts::{ContributionPieChart, ProjectionLineChart, SalesBarChart};
use super::constraints_panel::ConstraintsPanel;
use super::segments_table::SegmentsTable;
use crate::dashboards::d410_sales_optimization::api;
use crate::shared::components::indicator_set::IndicatorSetView;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;

fn indicator_map(response: Option<&OptimizationResponse>) -> HashMap<String, IndicatorValue> {
    response
        .map(|r| {
            r.indicators
                .iter()
                .map(|v| (v.id.0.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn SalesOptimizationDashboard() -> impl IntoView {
    let catalog = RwSignal::new(None::<ConstraintCatalog>);
    let bounds = RwSignal::new(ConstraintBounds::default());
    let response = RwSignal::new(None::<OptimizationResponse>);
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    // Only the newest request may write the response
    let request_seq = StoredValue::new(0u64);

    // Load catalog on mount
    spawn_local(async move {
        match api::get_constraint_catalog().await {
            Ok(cat) => {
                if cat.defaults != bounds.get_untracked() {
                    bounds.set(cat.defaults);
                }
                catalog.set(Some(cat));
            }
            Err(e) => {
                log::error!("Failed to load D410 constraint catalog: {}", e);
                error_msg.set(Some(e));
            }
        }
    });

    // Recompute on every bounds change
    Effect::new(move |_| {
        let current = bounds.get();
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        loading.set(true);

        spawn_local(async move {
            let result = api::recompute(&current).await;
            if request_seq.get_value() != seq {
                log::debug!("Dropping stale D410 response #{}", seq);
                return;
            }
            match result {
                Ok(data) => {
                    error_msg.set(None);
                    response.set(Some(data));
                }
                Err(e) => {
                    log::error!("D410 recompute failed: {}", e);
                    error_msg.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let rows = Signal::derive(move || {
        response.with(|r| r.as_ref().map(|r| r.rows.clone()).unwrap_or_default())
    });
    let projection = Signal::derive(move || {
        response.with(|r| {
            r.as_ref()
                .map(|r| r.projection.clone())
                .unwrap_or(SalesProjection {
                    years: Vec::new(),
                    series: Vec::new(),
                })
        })
    });
    let indicator_values = Signal::derive(move || response.with(|r| indicator_map(r.as_ref())));

    view! {
        <PageFrame page_id="d410_sales_optimization--dashboard" class="d410-dashboard">
            <PageHeader
                title="ACME Business Optimization Dashboard"
                description="Adjust the constraints to analyze ACME's sales and margin growth."
            >
                {move || loading.get().then(|| view! {
                    <span class="badge badge--info">"Recomputing..."</span>
                })}
            </PageHeader>

            <div class="d410-dashboard__layout">
                {move || catalog.get().map(|cat| view! {
                    <ConstraintsPanel sliders=cat.sliders bounds=bounds />
                })}

                <div class="d410-dashboard__content">
                    {move || error_msg.get().map(|msg| view! {
                        <div class="alert alert--error" style="margin-bottom: var(--spacing-md);">
                            {msg}
                        </div>
                    })}

                    {move || catalog.get().map(|cat| view! {
                        <IndicatorSetView metas=cat.indicators values=indicator_values />
                    })}

                    <section class="dashboard-section">
                        <h3 class="dashboard-section__title">"1. Sales & Margin Data with Constraints Applied"</h3>
                        <SegmentsTable rows=rows />
                    </section>

                    <section class="dashboard-section">
                        <h3 class="dashboard-section__title">"2. Sales Growth Over 5 Years"</h3>
                        <ProjectionLineChart projection=projection />
                    </section>

                    <section class="dashboard-section">
                        <h3 class="dashboard-section__title">"3. Contribution Breakdown"</h3>
                        <p class="dashboard-section__description">"How each segment contributes to total sales."</p>
                        <ContributionPieChart rows=rows />
                    </section>

                    <section class="dashboard-section">
                        <h3 class="dashboard-section__title">"4. Initial vs. Maximized Sales"</h3>
                        <SalesBarChart rows=rows />
                    </section>

                    <div class="alert alert--success">
                        {icon("check")}
                        "Adjust the constraints in the sidebar to dynamically update the business projections!"
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
