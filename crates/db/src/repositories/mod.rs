//! Repository layer: one zero-sized struct per table with async query methods.

pub mod todo_item_repo;

pub use todo_item_repo::TodoItemRepo;
