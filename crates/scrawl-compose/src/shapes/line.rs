// Imports
use crate::shapes::Drawable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "line")]
/// A line.
pub struct Line {
    #[serde(rename = "start")]
    /// Start coordinate.
    pub start: na::Vector2<f64>,
    #[serde(rename = "end")]
    /// End coordinate.
    pub end: na::Vector2<f64>,
}

impl Drawable for Line {
    fn draw(&self) -> String {
        String::from("Drawing a line")
    }
}

impl Line {
    /// A new line.
    pub fn new(start: na::Vector2<f64>, end: na::Vector2<f64>) -> Self {
        Self { start, end }
    }

    /// The length of the line.
    pub fn magnitude(&self) -> f64 {
        (self.end - self.start).magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn magnitude() {
        let line = Line::new(na::vector![1.0, 1.0], na::vector![4.0, 5.0]);

        assert_relative_eq!(line.magnitude(), 5.0);
    }
}
