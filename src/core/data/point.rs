/// Integer pixel coordinate. `y` grows downwards in window space, but the
/// renderer maps it straight onto the plane's vertical axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
