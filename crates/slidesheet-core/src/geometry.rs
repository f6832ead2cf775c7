use std::ops::Mul;

use crate::math::Vec2;

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Rect<f32> {
    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Shrink by the given left/right and bottom amounts, keeping the top edge.
    ///
    /// Width and height never go negative.
    pub fn shrink(&self, horizontal: f32, bottom: f32) -> Self {
        Rect {
            x: self.x + horizontal,
            y: self.y,
            width: (self.width - 2.0 * horizontal).max(0.0),
            height: (self.height - bottom).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

impl From<Vec2> for Size<f32> {
    fn from(v: Vec2) -> Self {
        Size::new(v.x, v.y)
    }
}

impl From<mint::Vector2<f32>> for Size<f32> {
    fn from(v: mint::Vector2<f32>) -> Self {
        Size::new(v.x, v.y)
    }
}

static_assertions::assert_impl_all!(Rect<f32>: Copy, Send, Sync);
static_assertions::assert_eq_size!(Size<f32>, Vec2);
