pub mod config;
pub mod logging;

pub mod app;
pub mod collection;
pub mod cycle;
pub mod fetch;
pub mod interaction;
pub mod notify;
pub mod render;
pub mod surface;
