pub mod config;
pub mod context;
pub mod entities;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;
pub mod views;
