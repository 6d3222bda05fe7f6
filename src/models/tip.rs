//! Advisory tip model

use serde::{Deserialize, Serialize};

/// A short informational entry shown on the tips screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: u32,
    pub title: String,
    pub body: String,
}

impl Tip {
    pub fn new(id: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
