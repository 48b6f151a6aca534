pub mod root;
pub mod todo;
