pub mod admin;
pub mod health_checks;
pub mod inversion;
pub mod item;
pub mod login;
pub mod users;

pub use health_checks::*;
