#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Core library for vaultmap.
//!
//! Scans a markdown vault, renders a map document listing its files, and
//! keeps that document current as the vault changes.

pub mod config;
pub mod map;
pub mod schedule;
pub mod settings;
pub mod vault;
pub mod watch;
