pub mod config;
pub mod logging;

pub mod arc;
pub mod error;
pub mod filter;
pub mod output;
pub mod record;
pub mod scan;
