pub mod api;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
pub mod ui;
