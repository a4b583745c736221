//! Frontend Models
//!
//! Data structures for the todo list and the remote payload.

use serde::{Deserialize, Serialize};

/// A single todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub done: bool,
    pub text: String,
}

/// Shape of the remote JSON fetched on startup
///
/// Decoding checks the field names only; nothing validates the
/// resource beyond what serde rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub text: String,
}
