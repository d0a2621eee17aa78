pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod processor;
pub mod sheet;
