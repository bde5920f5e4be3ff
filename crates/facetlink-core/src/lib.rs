pub mod config;
pub mod logging;

pub mod filter;
pub mod query;
pub mod sort;
