//! Configuration for the collection browser.

mod app_config;

pub use app_config::{AppConfig, DEFAULT_TYPESENSE_URL};
