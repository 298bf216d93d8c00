pub mod item;
pub mod token;
