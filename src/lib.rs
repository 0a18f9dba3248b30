pub mod action;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod ui;

pub use error::{NextVersionError, Result};
