//! cpi-navigator - terminal dashboard for an SAP Cloud Integration tenant
//!
//! Library crate exposing the tenant client, the configuration loader and
//! the pane coordinator used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod browser;
pub mod config;
pub mod cpi;
pub mod error;
pub mod sort;
pub mod ui;
