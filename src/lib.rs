pub mod config;
pub mod data_fetch;
pub mod db_connect;
pub mod env_loader;
pub mod error;
pub mod json_writer;
pub mod map_page;
pub mod models;
pub mod sanitize;

pub use error::{PipelineError, Result};
