pub mod api;
pub mod backend;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
