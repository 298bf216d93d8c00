mod inversion;
mod item;

pub use inversion::*;
pub use item::*;
