//! Core business logic for Kassa.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Double-entry vouchers and their balance rules
//! - `vat` - Output/input VAT and period summaries
//! - `networth` - Assets, debts and net worth
//! - `projection` - Interpolation over precomputed net-worth projections

pub mod ledger;
pub mod networth;
pub mod projection;
pub mod vat;
