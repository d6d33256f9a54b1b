// Imports
use super::{Circle, Drawable, Line, Rectangle, Triangle};
use serde::{Deserialize, Serialize};

/// Shape, storing shape variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "shape")]
pub enum Shape {
    #[serde(rename = "line")]
    /// A line shape.
    Line(Line),
    #[serde(rename = "rect")]
    /// A rectangle shape.
    Rectangle(Rectangle),
    #[serde(rename = "circle")]
    /// A circle shape.
    Circle(Circle),
    #[serde(rename = "triangle")]
    /// A triangle shape.
    Triangle(Triangle),
}

impl Default for Shape {
    fn default() -> Self {
        Self::Rectangle(Rectangle::default())
    }
}

impl Drawable for Shape {
    fn draw(&self) -> String {
        match self {
            Self::Line(line) => line.draw(),
            Self::Rectangle(rectangle) => rectangle.draw(),
            Self::Circle(circle) => circle.draw(),
            Self::Triangle(triangle) => triangle.draw(),
        }
    }
}
