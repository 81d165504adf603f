//! The bill ledger: labeled costs, per-party shares and the summary report.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::BillError;
use crate::money::{MoneyFormat, MAX_PLACES};
use crate::report::Report;
use crate::Result;

/// Label of the synthetic entry appended by [`Ledger::summarize`]
pub const TOTAL_LABEL: &str = "total";

/// Spacing between report columns
const COLUMN_GAP: &str = "   ";

/// One labeled cost and its per-party share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillEntry {
    /// Label with any delimiter already replaced by spaces
    pub label: String,
    /// Cost at full precision
    pub cost: Decimal,
    /// `cost / party_count` at full precision
    pub share: Decimal,
}

impl BillEntry {
    /// Label as shown in reports: lowercased, first character capitalized
    pub fn display_label(&self) -> String {
        capitalize(&self.label)
    }
}

/// An ordered collection of costs split `party_count` ways.
///
/// Entries are kept in insertion order, which is also the display order.
/// Nothing is removed or mutated once added.
#[derive(Debug, Clone)]
pub struct Ledger {
    party_count: u64,
    delimiter: Option<String>,
    format: MoneyFormat,
    entries: Vec<BillEntry>,
    total_index: Option<usize>,
}

impl Ledger {
    /// Create a ledger splitting costs `party_count` ways.
    ///
    /// A party count of zero or less is rejected with
    /// [`BillError::InvalidPartyCount`].
    pub fn new(party_count: i64, delimiter: Option<String>) -> Result<Self> {
        let party_count = u64::try_from(party_count)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(BillError::InvalidPartyCount(party_count))?;

        Ok(Self {
            party_count,
            delimiter,
            format: MoneyFormat::default(),
            entries: Vec::new(),
            total_index: None,
        })
    }

    /// Builder: render amounts with the given money format
    pub fn with_format(mut self, format: MoneyFormat) -> Self {
        self.format = format;
        self
    }

    /// Number of parties sharing the bill
    pub fn party_count(&self) -> u64 {
        self.party_count
    }

    /// Delimiter used to join multi-word labels, if any
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    /// Money format used by [`Ledger::summarize`]
    pub fn format(&self) -> &MoneyFormat {
        &self.format
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[BillEntry] {
        &self.entries
    }

    /// The total entry appended by the latest [`Ledger::summarize`], if any
    pub fn total_entry(&self) -> Option<&BillEntry> {
        self.total_index.map(|i| &self.entries[i])
    }

    /// Entries listed above the total, or `None` if never summarized
    pub fn cost_entries(&self) -> Option<&[BillEntry]> {
        self.total_index.map(|i| &self.entries[..i])
    }

    /// Add a cost given as text.
    ///
    /// Accepts plain decimal notation (`12.50`) as well as scientific
    /// notation (`1.25e1`). Anything else fails with
    /// [`BillError::InvalidCost`] and leaves the ledger untouched.
    pub fn add_cost(&mut self, label: &str, cost: &str) -> Result<()> {
        let value = parse_cost(cost).ok_or_else(|| BillError::InvalidCost {
            label: label.to_string(),
            value: cost.to_string(),
        })?;
        self.add_amount(label, value);
        Ok(())
    }

    /// Add a cost already held as a decimal
    pub fn add_amount(&mut self, label: &str, cost: Decimal) {
        let label = self.normalize_label(label);
        self.push_entry(label, cost);
    }

    /// Sum of every entry currently in the ledger.
    ///
    /// Fails with [`BillError::Overflow`] if the sum exceeds the decimal range.
    pub fn total_cost(&self) -> Result<Decimal> {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |acc, entry| acc.checked_add(entry.cost))
            .ok_or(BillError::Overflow)
    }

    /// Append the total entry and format every entry into aligned lines.
    ///
    /// Call this exactly once per ledger: a second call appends a second
    /// total row whose cost includes the first.
    pub fn summarize(&mut self) -> Result<Report> {
        let total = self.total_cost()?;
        self.push_entry(TOTAL_LABEL.to_string(), total);
        self.total_index = Some(self.entries.len() - 1);
        debug!(
            entries = self.entries.len() - 1,
            total = %total,
            parties = self.party_count,
            "summarized bill"
        );

        let labels: Vec<String> = self.entries.iter().map(BillEntry::display_label).collect();
        let costs: Vec<String> = self
            .entries
            .iter()
            .map(|e| self.format.format(&e.cost))
            .collect();
        let shares: Vec<String> = self
            .entries
            .iter()
            .map(|e| self.format.format(&e.share))
            .collect();

        let label_width = longest(&labels);
        let cost_width = longest(&costs) + 1;

        let lines = labels
            .iter()
            .zip(&costs)
            .zip(&shares)
            .map(|((label, cost), share)| {
                format!(
                    "{label:<label_width$}{COLUMN_GAP}{cost:<cost_width$}{COLUMN_GAP}({share})"
                )
            })
            .collect();

        Ok(Report::new(lines))
    }

    fn push_entry(&mut self, label: String, cost: Decimal) {
        // party_count >= 1, so the quotient never exceeds the cost
        let share = cost / Decimal::from(self.party_count);
        debug!(label = %label, cost = %cost, share = %share, "added entry");
        self.entries.push(BillEntry { label, cost, share });
    }

    fn normalize_label(&self, label: &str) -> String {
        match self.delimiter.as_deref() {
            Some(delimiter) if !delimiter.is_empty() => {
                let joined = label.split(delimiter).collect::<Vec<_>>().join(" ");
                trace!(raw = label, label = %joined, "normalized label");
                joined
            }
            _ => label.to_string(),
        }
    }
}

/// Parse a cost token into an exact decimal.
///
/// Digits beyond the maximum decimal scale are rounded away, whichever
/// notation the value is written in.
fn parse_cost(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if let Ok(value) = Decimal::from_str(raw) {
        return Some(value);
    }

    let (mantissa, exponent) = raw.split_once(|c| c == 'e' || c == 'E')?;
    let exponent: i64 = exponent.parse().ok()?;
    if exponent >= 0 {
        return Decimal::from_scientific(raw).ok();
    }
    let mantissa = Decimal::from_str(mantissa).ok()?;
    Some(shift_right(mantissa, exponent.unsigned_abs()))
}

/// Divide by `10^places`, rounding half-to-even past the maximum scale.
fn shift_right(value: Decimal, places: u64) -> Decimal {
    let max_scale = u64::from(MAX_PLACES);
    let scale = u64::from(value.scale()).saturating_add(places);
    if scale <= max_scale {
        return Decimal::from_i128_with_scale(value.mantissa(), scale as u32);
    }

    // |mantissa| < 10^29, so anything shifted 30 or more digits is zero
    let excess = scale - max_scale;
    if excess >= 30 {
        return Decimal::ZERO;
    }
    let divisor = 10i128.pow(excess as u32);
    let mantissa = value.mantissa();
    let mut quotient = mantissa / divisor;
    let twice_remainder = (mantissa % divisor).abs() * 2;
    if twice_remainder > divisor || (twice_remainder == divisor && quotient % 2 != 0) {
        quotient += mantissa.signum();
    }
    Decimal::from_i128_with_scale(quotient, MAX_PLACES)
}

/// Lowercase, then uppercase the first character.
fn capitalize(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn longest(strings: &[String]) -> usize {
    strings.iter().map(|s| s.chars().count()).max().unwrap_or(0)
}
