pub mod backend_client;
pub mod user_notifier;
