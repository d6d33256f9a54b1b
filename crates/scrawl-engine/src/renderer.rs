// Imports
use scrawl_compose::shapes::Drawable;
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

/// An error that can occur while rendering shapes.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing a shape description to the render sink failed.
    #[error("writing shape description to the render sink failed")]
    Sink(#[from] io::Error),
}

/// Renders shapes by writing their descriptions to its sink, one line per shape.
///
/// The renderer's only view of its input is the draw capability. Which text a
/// value produces is decided by the value itself, so new shape types render
/// without any change here.
#[derive(Debug)]
pub struct Renderer<W>
where
    W: Write,
{
    sink: W,
}

impl Renderer<io::Stdout> {
    /// A renderer writing to the standard output.
    pub fn stdout() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl<W> Renderer<W>
where
    W: Write,
{
    /// Construct with the given sink.
    pub fn with_sink(sink: W) -> Self {
        Self { sink }
    }

    /// Consume the renderer, returning the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Draw every shape of the sequence to the sink, one line each, preserving
    /// the sequence order.
    ///
    /// An empty sequence writes nothing and succeeds. The first failed write
    /// aborts the run.
    pub fn draw_all<I>(&mut self, shapes: I) -> Result<(), RenderError>
    where
        I: IntoIterator,
        I::Item: Drawable,
    {
        let mut drawn = 0_usize;
        for shape in shapes {
            writeln!(self.sink, "{}", shape.draw())?;
            drawn += 1;
        }
        debug!("rendered {drawn} shapes");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_compose::shapes::{Circle, Rectangle, Shape, Triangle};

    fn render_to_string<I>(shapes: I) -> String
    where
        I: IntoIterator,
        I::Item: Drawable,
    {
        let mut renderer = Renderer::with_sink(Vec::new());
        renderer.draw_all(shapes).unwrap();
        String::from_utf8(renderer.into_sink()).unwrap()
    }

    #[test]
    fn draws_in_input_order() {
        let shapes = vec![
            Shape::Rectangle(Rectangle::default()),
            Shape::Circle(Circle::default()),
        ];

        assert_eq!(
            render_to_string(&shapes),
            "Drawing a rectangle\nDrawing a circle\n"
        );
    }

    #[test]
    fn one_line_per_shape() {
        let shapes = vec![Shape::default(); 17];

        assert_eq!(render_to_string(&shapes).lines().count(), 17);
    }

    #[test]
    fn empty_sequence_draws_nothing() {
        assert_eq!(render_to_string(Vec::<Shape>::new()), "");
    }

    #[test]
    fn appending_a_shape_appends_one_line() {
        let mut shapes = vec![
            Shape::Rectangle(Rectangle::default()),
            Shape::Circle(Circle::default()),
        ];
        let before = render_to_string(&shapes);

        shapes.push(Shape::Triangle(Triangle::default()));

        assert_eq!(
            render_to_string(&shapes),
            format!("{before}Drawing a triangle\n")
        );
    }

    #[test]
    fn new_shape_types_render_without_renderer_changes() {
        struct Hexagon;

        impl Drawable for Hexagon {
            fn draw(&self) -> String {
                String::from("Drawing a hexagon")
            }
        }

        let shapes: Vec<Box<dyn Drawable>> = vec![
            Box::new(Rectangle::default()),
            Box::new(Circle::default()),
            Box::new(Hexagon),
        ];

        assert_eq!(
            render_to_string(shapes),
            "Drawing a rectangle\nDrawing a circle\nDrawing a hexagon\n"
        );
    }

    #[test]
    fn failed_sink_write_surfaces() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut renderer = Renderer::with_sink(FailingSink);

        assert!(matches!(
            renderer.draw_all([Shape::default()]),
            Err(RenderError::Sink(_))
        ));
    }
}
