// src/config/consts.rs

// Feed
pub const DATA_URL: &str = "https://covid.ourworldindata.org/data/owid-covid-data.csv";
pub const SOURCE_NAME: &str = "Our World in Data";
pub const USER_AGENT: &str = concat!("covid_dash/", env!("CARGO_PKG_VERSION"));

// Net config
pub const CONNECT_TIMEOUT_SECS: u64 = 15;
pub const READ_TIMEOUT_SECS: u64 = 120;

// Feed columns the pipeline interprets; everything else is passthrough
pub const COL_LOCATION: &str = "location";
pub const COL_DATE: &str = "date";
pub const COL_NEW_CASES: &str = "new_cases";
pub const COL_NEW_DEATHS: &str = "new_deaths";
pub const COL_NEW_VACCINATIONS: &str = "new_vaccinations";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Selection defaults
pub const DEFAULT_REGION: &str = "Canada";
pub const DEFAULT_COMPARISON: &[&str] = &["Canada", "United States"];

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "region";

// GUI
pub const APP_TITLE: &str = "COVID-19 Dashboard";
pub const APP_AUTHOR: &str = "By: Greg Beaver";
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 860.0;
pub const CHART_HEIGHT: f32 = 260.0;

pub const DISCLAIMER: &str = "Disclaimer: The data presented may not be accurate, \
it's a representation of what is in the data, and has not been validated.";
