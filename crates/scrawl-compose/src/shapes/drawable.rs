/// Types that can draw themselves as a textual description.
pub trait Drawable {
    /// The textual description of the shape.
    ///
    /// Pure and infallible. The text is fixed per type, so the same receiver
    /// produces the same description on every call.
    fn draw(&self) -> String;
}

impl<T> Drawable for &T
where
    T: Drawable + ?Sized,
{
    fn draw(&self) -> String {
        (**self).draw()
    }
}

impl<T> Drawable for Box<T>
where
    T: Drawable + ?Sized,
{
    fn draw(&self) -> String {
        (**self).draw()
    }
}
