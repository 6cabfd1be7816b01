pub mod catalog;
pub mod config;
pub mod event;
pub mod reader;
pub mod share;
pub mod store;
pub mod ui;
pub mod util;
