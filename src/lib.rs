pub mod config;
pub mod error;
pub mod export;
pub mod formatting;
#[cfg(feature = "gui")]
pub mod gui;
pub mod history;
pub mod mapper;
pub mod point;
pub mod query;
pub mod stats;
pub mod vector;
