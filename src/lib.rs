pub mod auth;
pub mod core;
pub mod db;
pub mod models;
pub mod samity_app;
pub mod state_store;
