//! Terminal client for a code-analysis backend: health polling, snippet
//! analysis, repository scans and a searchable report browser.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
