pub mod choice;
pub mod config;
pub mod error;
pub mod key;
pub mod navigate;
pub mod reorder;
pub mod select;
pub mod state;
