//! Table rendering for stdout
//!
//! Produces the final left-aligned table, sorted by the Name column. The
//! third column keeps the historical "State" header even though it carries
//! instance type / engine version data.

use crate::query::ResourceRecord;
use comfy_table::{presets, Cell, CellAlignment, Table};

/// Build the output table: header `Name | IP | State`, rows sorted by
/// name ascending, all columns left-aligned.
pub fn render(records: &[ResourceRecord]) -> Table {
    let mut sorted: Vec<&ResourceRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);
    table.set_header(vec![
        Cell::new("Name").set_alignment(CellAlignment::Left),
        Cell::new("IP").set_alignment(CellAlignment::Left),
        Cell::new("State").set_alignment(CellAlignment::Left),
    ]);

    for record in sorted {
        table.add_row(vec![&record.name, &record.address, &record.detail]);
    }

    table
}
