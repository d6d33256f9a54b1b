// Imports
use super::Line;
use crate::shapes::Drawable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "rectangle")]
/// A rectangle.
pub struct Rectangle {
    #[serde(rename = "center")]
    /// The center of the rectangle.
    pub center: na::Vector2<f64>,
    #[serde(rename = "half_extents")]
    /// The half extents, specifying the extents from the center.
    pub half_extents: na::Vector2<f64>,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            center: na::Vector2::zeros(),
            half_extents: na::vector![0.5, 0.5],
        }
    }
}

impl Drawable for Rectangle {
    fn draw(&self) -> String {
        String::from("Drawing a rectangle")
    }
}

impl Rectangle {
    /// Construct from center and half extents.
    pub fn from_half_extents(center: na::Vector2<f64>, half_extents: na::Vector2<f64>) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Construct from corners across from each other.
    pub fn from_corners(first: na::Vector2<f64>, second: na::Vector2<f64>) -> Self {
        Self {
            center: first + (second - first) * 0.5,
            half_extents: ((second - first) * 0.5).abs(),
        }
    }

    /// The outlines of the rect.
    pub fn outline_lines(&self) -> [Line; 4] {
        let upper_left =
            self.center + na::vector![-self.half_extents[0], -self.half_extents[1]];
        let upper_right =
            self.center + na::vector![self.half_extents[0], -self.half_extents[1]];
        let lower_left =
            self.center + na::vector![-self.half_extents[0], self.half_extents[1]];
        let lower_right =
            self.center + na::vector![self.half_extents[0], self.half_extents[1]];

        [
            Line {
                start: upper_left,
                end: lower_left,
            },
            Line {
                start: lower_left,
                end: lower_right,
            },
            Line {
                start: lower_right,
                end: upper_right,
            },
            Line {
                start: upper_right,
                end: upper_left,
            },
        ]
    }
}
