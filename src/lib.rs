//! Resume match library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod resources;

pub use error::{Result, ResumeMatchError};
pub use config::Config;
