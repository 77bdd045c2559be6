//! Library components of the `gridview` terminal front end.

pub mod config;
pub mod logging;
pub mod mockdata;
pub mod render;
pub mod script;
pub mod session;
