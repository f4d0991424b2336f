// src/gui/components/mod.rs
pub mod charts;
pub mod compare_picker;
pub mod dashboard;
pub mod data_table;
pub mod export_bar;
pub mod metrics;
pub mod sidebar;
