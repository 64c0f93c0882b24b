pub mod config;
pub mod logging;

pub mod url_model;
pub mod url_sync;
