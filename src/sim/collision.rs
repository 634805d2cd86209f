//! Axis-aligned footprints and overlap tests
//!
//! Every entity in the field is a fixed-size square, so collision reduces to
//! rectangle intersection on integer screen coordinates.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::FOOTPRINT;

/// Axis-aligned bounding box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// Top-left corner
    pub min: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Footprint {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// The standard entity footprint with its top-left corner at `pos`
    pub const fn square(pos: IVec2) -> Self {
        Self::new(pos.x, pos.y, FOOTPRINT, FOOTPRINT)
    }

    /// Bottom-right corner (exclusive)
    #[inline]
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    /// True when the box has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Strict intersection: the boxes must share a region of positive area.
    /// Boxes that only touch along an edge or corner do not intersect.
    pub fn intersects(&self, other: &Footprint) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}
