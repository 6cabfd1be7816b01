pub mod app;
pub mod components;
pub mod context;
pub mod input;
pub mod layout;
pub mod router;
pub mod state;
pub mod theme;
pub mod traits;
pub mod tui;
pub mod util;
pub mod views;
