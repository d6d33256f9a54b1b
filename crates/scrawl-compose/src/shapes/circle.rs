// Imports
use crate::shapes::Drawable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "circle")]
/// A circle.
pub struct Circle {
    #[serde(rename = "center")]
    /// The center of the circle.
    pub center: na::Vector2<f64>,
    #[serde(rename = "radius")]
    /// The radius.
    pub radius: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: na::Vector2::zeros(),
            radius: 0.5,
        }
    }
}

impl Drawable for Circle {
    fn draw(&self) -> String {
        String::from("Drawing a circle")
    }
}

impl Circle {
    /// A new circle from center and radius.
    pub fn new(center: na::Vector2<f64>, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Construct from two points across from each other on the circle.
    pub fn from_diameter(first: na::Vector2<f64>, second: na::Vector2<f64>) -> Self {
        Self {
            center: first + (second - first) * 0.5,
            radius: (second - first).magnitude() * 0.5,
        }
    }

    /// The circumference of the circle.
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_diameter() {
        let circle = Circle::from_diameter(na::vector![-3.0, 0.0], na::vector![3.0, 0.0]);

        assert_relative_eq!(circle.center, na::vector![0.0, 0.0]);
        assert_relative_eq!(circle.radius, 3.0);
    }

    #[test]
    fn circumference() {
        let circle = Circle::new(na::vector![1.0, 1.0], 1.0);

        assert_relative_eq!(circle.circumference(), std::f64::consts::TAU);
    }
}
