// Imports
use clap::Parser;
use scrawl_compose::shapes::{Circle, Line, Rectangle, Shape, Triangle};
use scrawl_engine::Renderer;
use tracing::debug;

///    scrawl-cli{n}{n}
///    Draws shapes to the standard output, one description per line.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Draws the given shapes in the given order.
    Draw {
        /// The shapes to draw.
        #[arg(required = true, value_enum)]
        shapes: Vec<ShapeKind>,
    },
}

/// The shape kinds that can be requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Line,
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::default()),
            ShapeKind::Circle => Shape::Circle(Circle::default()),
            ShapeKind::Triangle => Shape::Triangle(Triangle::default()),
            ShapeKind::Line => Shape::Line(Line::default()),
        }
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Draw { shapes } => {
            debug!("drawing {} shapes to stdout", shapes.len());
            let shapes = shapes.into_iter().map(Shape::from).collect::<Vec<Shape>>();

            let mut renderer = Renderer::stdout();
            renderer.draw_all(&shapes)?;
        }
    }

    Ok(())
}
