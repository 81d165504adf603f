//! Table-ready bill data for structured output.
//!
//! `BillTable` carries the same rows as the text report, already formatted,
//! alongside the raw decimals. It serializes directly to JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BillEntry, Ledger};

/// A single row in the table (entry or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Display label (capitalized)
    pub label: String,
    /// Formatted cost
    pub cost: String,
    /// Formatted per-party share
    pub share: String,
    /// Cost at full precision
    pub raw_cost: Decimal,
    /// Share at full precision
    pub raw_share: Decimal,
}

/// Presentation-ready view of a summarized ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTable {
    /// Number of parties sharing the bill
    pub party_count: u64,
    /// Entry rows in insertion order
    pub rows: Vec<TableRow>,
    /// Total row
    pub footer: TableRow,
}

impl BillTable {
    /// Build a table from a summarized ledger.
    ///
    /// Returns `None` if [`Ledger::summarize`] was never called.
    pub fn from_ledger(ledger: &Ledger) -> Option<Self> {
        let row = |entry: &BillEntry| TableRow {
            label: entry.display_label(),
            cost: ledger.format().format(&entry.cost),
            share: ledger.format().format(&entry.share),
            raw_cost: entry.cost,
            raw_share: entry.share,
        };

        let total = ledger.total_entry()?;
        let entries = ledger.cost_entries()?;
        Some(BillTable {
            party_count: ledger.party_count(),
            rows: entries.iter().map(row).collect(),
            footer: row(total),
        })
    }
}
