use contracts::dashboards::d410_sales_optimization::SegmentRecord;
use std::collections::HashMap;

/// Categorical hierarchy levels a rollup can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBy {
    Brand,
    Category,
    Geography,
    Portfolio,
}

impl GroupBy {
    pub const ALL: [GroupBy; 4] = [
        GroupBy::Brand,
        GroupBy::Category,
        GroupBy::Geography,
        GroupBy::Portfolio,
    ];

    pub fn key<'a>(&self, record: &'a SegmentRecord) -> &'a str {
        match self {
            GroupBy::Brand => &record.brand,
            GroupBy::Category => &record.category,
            GroupBy::Geography => &record.geography,
            GroupBy::Portfolio => &record.portfolio,
        }
    }
}

/// Group totals of initial sales attached to one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rollups {
    pub brand_sales: i64,
    pub category_sales: i64,
    pub geography_sales: i64,
    pub portfolio_sales: i64,
}

impl Rollups {
    pub fn get(&self, group_by: GroupBy) -> i64 {
        match group_by {
            GroupBy::Brand => self.brand_sales,
            GroupBy::Category => self.category_sales,
            GroupBy::Geography => self.geography_sales,
            GroupBy::Portfolio => self.portfolio_sales,
        }
    }

    fn set(&mut self, group_by: GroupBy, value: i64) {
        match group_by {
            GroupBy::Brand => self.brand_sales = value,
            GroupBy::Category => self.category_sales = value,
            GroupBy::Geography => self.geography_sales = value,
            GroupBy::Portfolio => self.portfolio_sales = value,
        }
    }
}

/// Sum of initial sales per distinct value of one dimension
pub fn group_totals<'a>(records: &'a [SegmentRecord], group_by: GroupBy) -> HashMap<&'a str, i64> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for record in records {
        *totals.entry(group_by.key(record)).or_insert(0) += record.initial_sales;
    }
    totals
}

/// Broadcast every group total back onto the records of that group.
///
/// Output is index-aligned with `records`.
pub fn rollup_sums(records: &[SegmentRecord]) -> Vec<Rollups> {
    let mut rollups = vec![Rollups::default(); records.len()];

    for group_by in GroupBy::ALL {
        let totals = group_totals(records, group_by);
        for (record, rollup) in records.iter().zip(rollups.iter_mut()) {
            let total = totals.get(group_by.key(record)).copied().unwrap_or_default();
            rollup.set(group_by, total);
        }
    }

    rollups
}
