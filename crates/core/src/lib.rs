//! Core rate logic for FxRates.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Rate tables, rate listing and currency conversion live here.
//!
//! # Modules
//!
//! - `currency` - Rate tables, rate providers, listing and conversion

pub mod currency;
