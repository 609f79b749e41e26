pub mod app;
pub mod browser;
pub mod config;
pub mod containers;
pub mod format;
pub mod models;
pub mod routes;
pub mod storage;
pub mod store;
pub mod views;
