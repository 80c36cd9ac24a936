//! Business-hours deadline engine.
//!
//! This crate computes the instant at which a duration of business time has
//! elapsed, given a calendar of default opening hours, per-day exceptions and
//! closed days. It ships a YAML calendar loader and an HTTP API on top of the
//! core calculation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
