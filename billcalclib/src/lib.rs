//! # billcalclib
//!
//! A bill-splitting ledger: labeled costs, exact per-party shares, and an
//! aligned currency report.
//!
//! ## Overview
//!
//! Costs are held as exact decimals (`rust_decimal`) and divided among a fixed
//! number of parties without rounding. Rounding happens only when amounts
//! are rendered, using banker's rounding and a configurable [`MoneyFormat`].
//!
//! - **Ledger**: ordered entries with per-party shares
//! - **Report**: aligned lines, a dash rule and the total line
//! - **BillTable**: serializable rows for structured output
//!
//! ## Example
//!
//! ```rust
//! use billcalclib::Ledger;
//!
//! let mut ledger = Ledger::new(2, Some("-".to_string())).unwrap();
//! ledger.add_cost("rent", "1000").unwrap();
//! ledger.add_cost("power-bill", "50").unwrap();
//!
//! let report = ledger.summarize().unwrap();
//! assert_eq!(report.lines().len(), 3);
//! assert!(report.lines()[1].starts_with("Power bill"));
//! assert!(report.total_line().unwrap().ends_with("(525.00)"));
//! ```

pub mod error;
pub mod input;
pub mod ledger;
pub mod money;
pub mod report;
pub mod table;

pub use error::BillError;
pub use input::pair_tokens;
pub use ledger::{BillEntry, Ledger, TOTAL_LABEL};
pub use money::{MoneyFormat, DEFAULT_PLACES, MAX_PLACES};
pub use report::Report;
pub use table::{BillTable, TableRow};

/// Result type for billcalclib operations
pub type Result<T> = std::result::Result<T, BillError>;
