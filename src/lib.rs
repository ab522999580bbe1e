//! Workday Calendar
//!
//! This crate moves a date/time forward or backward by a fractional number
//! of working days, skipping weekends and holidays and respecting a daily
//! working window. It also ships a small HTTP service for running
//! calculations and managing holiday records.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
