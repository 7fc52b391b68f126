//! popcine library
//!
//! Terminal movie discovery: debounced catalog search plus a shared list of
//! trending searches. The binary in main.rs only wires these together.

pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod trends;
pub mod ui;
pub mod utils;
