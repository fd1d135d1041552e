use contracts::dashboards::d410_sales_optimization::SegmentRecord;
use once_cell::sync::OnceCell;

use super::catalog::Dimensions;
use super::generator::generate_seeded;

/// Base table generated once per process, never mutated afterwards
static BASE_TABLE: OnceCell<Vec<SegmentRecord>> = OnceCell::new();

/// Generate the base table from `seed`. Later calls keep the first table.
pub fn initialize_base_table(seed: u64) -> &'static [SegmentRecord] {
    BASE_TABLE.get_or_init(|| {
        let records = generate_seeded(seed, &Dimensions::acme());
        tracing::info!(
            "D410: generated {} segments from seed {}",
            records.len(),
            seed
        );
        records
    })
}

/// The base table; `anyhow` error when called before initialization
pub fn base_table() -> anyhow::Result<&'static [SegmentRecord]> {
    BASE_TABLE
        .get()
        .map(|t| t.as_slice())
        .ok_or_else(|| anyhow::anyhow!("D410 base table is not initialized"))
}
