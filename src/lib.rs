// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod progress;

pub mod aggregate;
pub mod data;
pub mod export;
pub mod filter;
pub mod gui;
pub mod regions;
pub mod source;
pub mod store;
pub mod table;
pub mod view;

pub use error::{Error, Result};
