//! D410 sales optimization dashboard.
//!
//! Pipeline, in call order: `generator` builds the base table once at startup,
//! `service::recompute` runs `constraints`, `aggregator`, `projector` and
//! `targets` over it on every slider change.

pub mod aggregator;
pub mod catalog;
pub mod constraints;
pub mod generator;
pub mod projector;
pub mod service;
pub mod state;
pub mod targets;
