pub mod auth;
pub mod checkout;
pub mod config;
pub mod data;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
