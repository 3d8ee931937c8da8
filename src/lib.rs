//! Gridbook – a small record-keeping and linear-forecast service for energy
//! demand figures.
//!
//! Gridbook centers on the *record* concept: a date-stamped demand
//! observation of the form `(id, date, demand_gwh)`, where:
//! * A [`record::RecordId`] is an opaque identity (a simple `u64`), assigned
//!   monotonically starting at 1 and never reused within a process lifetime.
//! * A [`record::Record`] couples an id with a calendar date and a demand
//!   figure in gigawatt hours.
//!
//! Records are owned by a keeper structure (see the `record` module) behind a
//! single mutex-guarded [`record::Ledger`], so every operation is one
//! critical section and the id invariants hold under concurrent requests.
//!
//! ## Modules
//! * [`record`] – The record building blocks, the keeper and the ledger.
//! * [`forecast`] – Fixed-ratio exponential projection over a ledger snapshot.
//! * [`server`] – The axum HTTP surface translating verbs into ledger calls.
//! * [`settings`] – Config-file / environment driven runtime settings.
//! * [`error`] – The crate-wide error enum and `Result` alias.
//!
//! ## Storage
//! Everything lives in memory and is gone on restart. The ledger starts
//! empty; ids count up from 1 for the life of the process.
//!
//! ## Quick Start
//! ```
//! use chrono::NaiveDate;
//! use gridbook::{forecast, record::Ledger};
//! let ledger = Ledger::new();
//! ledger
//!     .insert(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), 1200.0)
//!     .unwrap();
//! let points = forecast::project(&ledger.all().unwrap(), 2, 2025).unwrap();
//! assert_eq!(points[0].forecast_gwh, 1260.0);
//! assert_eq!(points[1].year, 2027);
//! ```

pub mod error;
pub mod forecast;
pub mod record;
pub mod server;
pub mod settings;
