pub mod common;
pub mod config;
pub mod list;
pub mod login;
pub mod snap;
pub mod switch;
