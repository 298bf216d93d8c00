mod add;
mod edit;

pub use add::AddItem as Add;
pub use edit::EditItem as Edit;
