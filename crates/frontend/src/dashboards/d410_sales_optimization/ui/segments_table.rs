use contracts::dashboards::d410_sales_optimization::SegmentRow;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

use crate::shared::components::table::{format_money, format_percent};
use crate::shared::list_utils::{
    compare_f64, get_sort_class, get_sort_indicator, sort_list, Sortable,
};

/// (sort field, header label, numeric column)
const COLUMNS: &[(&str, &str, bool)] = &[
    ("portfolio", "Portfolio", false),
    ("geography", "Geography", false),
    ("category", "Category", false),
    ("brand", "Brand", false),
    ("segment", "Segment", false),
    ("initial_sales", "Initial Sales", true),
    ("max_sales", "Max Sales", true),
    ("margin", "Margin", true),
    ("max_contribution", "Max Contribution", true),
];

impl Sortable for SegmentRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let (a, b) = (&self.record, &other.record);
        match field {
            "portfolio" => a.portfolio.cmp(&b.portfolio),
            "geography" => a.geography.cmp(&b.geography),
            "category" => a.category.cmp(&b.category),
            "brand" => a.brand.cmp(&b.brand),
            "segment" => a.segment.cmp(&b.segment),
            "initial_sales" => a.initial_sales.cmp(&b.initial_sales),
            "max_sales" => compare_f64(self.max_sales, other.max_sales),
            "margin" => compare_f64(a.margin, b.margin),
            "max_contribution" => compare_f64(self.max_contribution, other.max_contribution),
            _ => Ordering::Equal,
        }
    }
}

/// Rows in display order; an empty sort field keeps generation order
fn sorted_rows(rows: &[SegmentRow], field: &str, ascending: bool) -> Vec<SegmentRow> {
    let mut rows = rows.to_vec();
    if !field.is_empty() {
        sort_list(&mut rows, field, ascending);
    }
    rows
}

#[component]
pub fn SegmentsTable(#[prop(into)] rows: Signal<Vec<SegmentRow>>) -> impl IntoView {
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);

    let toggle_sort = move |field: &'static str| {
        if sort_field.with_untracked(|f| f == field) {
            sort_ascending.update(|asc| *asc = !*asc);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    };

    let display_rows =
        Memo::new(move |_| rows.with(|r| sorted_rows(r, &sort_field.get(), sort_ascending.get())));

    let headers = COLUMNS
        .iter()
        .map(|&(field, label, numeric)| {
            let header_class = if numeric {
                "table__sortable-header table__sortable-header--numeric"
            } else {
                "table__sortable-header"
            };
            view! {
                <TableHeaderCell resizable=false min_width=110.0>
                    <div class=header_class style="cursor: pointer;" on:click=move |_| toggle_sort(field)>
                        {label}
                        <span class=move || sort_field.with(|s| get_sort_class(s, field))>
                            {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                        </span>
                    </div>
                </TableHeaderCell>
            }
        })
        .collect_view();

    view! {
        <div class="table-wrapper" style="overflow-x: auto;">
            <Table attr:style="width: 100%; min-width: 1000px;">
                <TableHeader>
                    <TableRow>
                        {headers}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || display_rows.get()
                        key=|row| row.record.segment.clone()
                        children=move |row| {
                            let r = row.record;
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{r.portfolio}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.geography}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.category}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.brand}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.segment}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class="table__number">{format_money(r.initial_sales as f64)}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class="table__number">{format_money(row.max_sales)}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class="table__number">{format_percent(r.margin, 2)}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class="table__number">{format_percent(row.max_contribution, 2)}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
