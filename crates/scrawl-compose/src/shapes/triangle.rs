// Imports
use super::Line;
use crate::shapes::Drawable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "triangle")]
/// A triangle.
pub struct Triangle {
    #[serde(rename = "vertices")]
    /// The three vertices, in drawing order.
    pub vertices: [na::Vector2<f64>; 3],
}

impl Default for Triangle {
    fn default() -> Self {
        Self {
            vertices: [
                na::vector![0.0, 0.0],
                na::vector![1.0, 0.0],
                na::vector![0.5, 1.0],
            ],
        }
    }
}

impl Drawable for Triangle {
    fn draw(&self) -> String {
        String::from("Drawing a triangle")
    }
}

impl Triangle {
    /// Construct from its vertices.
    pub fn from_vertices(vertices: [na::Vector2<f64>; 3]) -> Self {
        Self { vertices }
    }

    /// The outlines of the triangle.
    pub fn outline_lines(&self) -> [Line; 3] {
        [
            Line {
                start: self.vertices[0],
                end: self.vertices[1],
            },
            Line {
                start: self.vertices[1],
                end: self.vertices[2],
            },
            Line {
                start: self.vertices[2],
                end: self.vertices[0],
            },
        ]
    }

    /// The perimeter of the triangle.
    pub fn perimeter(&self) -> f64 {
        self.outline_lines()
            .into_iter()
            .map(|line| line.magnitude())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perimeter() {
        let triangle = Triangle::from_vertices([
            na::vector![0.0, 0.0],
            na::vector![3.0, 0.0],
            na::vector![3.0, 4.0],
        ]);

        assert_relative_eq!(triangle.perimeter(), 12.0);
    }
}
