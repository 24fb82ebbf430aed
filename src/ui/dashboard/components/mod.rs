//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod accounts;
pub mod footer;
pub mod forms;
pub mod header;
pub mod logs;
pub mod urls;
