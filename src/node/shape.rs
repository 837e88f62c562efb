//! Generic on-canvas shape attributes
//!
//! The drawing toolkit owns rendering and connection management; the only
//! generic attributes that travel through the saved topology with the VM
//! fields are the node id, position and size.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShapeAttributes {
    /// Stable node id, referenced by connection records elsewhere in the
    /// saved topology
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: u32,
    pub height: u32,
}

impl ShapeAttributes {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}
