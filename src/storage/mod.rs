//! Storage layer for spendlog
//!
//! JSON file storage with atomic writes and lenient reads.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json_lenient, write_json_atomic};
