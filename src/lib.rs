pub mod auth;
pub mod configuration;
pub mod db;
pub mod forms;
pub(crate) mod helpers;
mod middleware;
pub mod models;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod views;
