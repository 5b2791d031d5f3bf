//! Color types for grid rendering.
//!
//! The default grid theme is grayscale (white surface, gray rules, black
//! cells), matching the classic textbook presentation of rasterization
//! diagrams.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component, 255 = fully opaque.
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::gray(0);
    /// Opaque white.
    pub const WHITE: Self = Self::gray(255);
    /// Light gray, the default grid-line color.
    pub const LIGHT_GRAY: Self = Self::gray(192);
    /// Dark gray, the default axis color.
    pub const DARK_GRAY: Self = Self::gray(64);

    /// Build a color from all four components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from the three channel components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Build an opaque gray of the given level.
    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// The components as a `[r, g, b, a]` byte array, the framebuffer's
    /// pixel layout.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Rebuild a color from its `[r, g, b, a]` byte array.
    #[must_use]
    pub const fn from_array(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}
