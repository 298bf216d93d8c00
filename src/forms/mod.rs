pub mod inversion;
pub mod item;
mod login;

pub use login::LoginForm;
