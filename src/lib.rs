pub mod config;
pub mod database;
pub mod duration;
pub mod error;
pub mod handlers;
pub mod server;
pub mod views;
pub mod youtube;
