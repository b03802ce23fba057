//! 3-component float triplet.
//!
//! [`Vec3`] carries one pixel through the float stages of a filter: linear
//! RGB, LMS cone responses, or XYZ. Component meaning depends on the stage:
//!
//! | Stage | x | y | z |
//! |-------|---|---|---|
//! | linear RGB | R | G | B |
//! | cone space | L | M | S |
//! | CIE XYZ | X | Y | Z |

/// A float triplet (linear RGB, LMS, XYZ).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R, L, or X)
    pub x: f32,
    /// Y component (G, M, or Y)
    pub y: f32,
    /// Z component (B, S, or Z)
    pub z: f32,
}

impl Vec3 {
    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}
