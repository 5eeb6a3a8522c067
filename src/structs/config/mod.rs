pub mod backend_config;
pub mod config;
pub mod console_config;
