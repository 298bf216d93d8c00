mod add;
mod edit;

pub use add::AddInversion as Add;
pub use edit::EditInversion as Edit;
