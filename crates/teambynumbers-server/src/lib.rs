//! teambynumbers server library entry.
//!
//! This crate wires the flat-file stores, the gauge exporter, the metrics
//! registry and the HTTP surface into one dashboard service. It is consumed
//! by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod exporter;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
pub mod views;
