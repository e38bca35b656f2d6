pub mod app;
pub mod binder;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod options;
pub mod request;
pub mod source;
pub mod suggestion;
pub mod widgets;
pub mod worker;
