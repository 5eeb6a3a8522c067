pub mod command_runner;
pub mod console;
pub mod console_command;
