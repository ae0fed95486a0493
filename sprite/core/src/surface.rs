//! A module for working with 2-dimensional pixel surfaces.
//!
//! [`Surface`] is the read side (sprites), [`SurfaceMut`] the write side (framebuffers). Both work on `i32` pixel
//! coordinates with the origin in the top-left corner.

use spritefx_geom::{Rectangle, Vector2};

use crate::color::Color;
use crate::error::SurfaceError;

/// A 2-dimensional surface that can be read from.
pub trait Surface {
    /// The size in pixels.
    fn size(&self) -> Vector2<i32>;

    /// Retrieves the pixel at the provided position.
    ///
    /// Bounds checking is up to the implementation.
    fn pixel(&self, x: i32, y: i32) -> Color;

    /// The area covered by the surface, starting at `(0, 0)`.
    #[inline(always)]
    fn rect(&self) -> Rectangle<i32> {
        let size = self.size();
        Rectangle::from_size(Vector2::default(), size.x, size.y)
    }
}

/// A 2-dimensional surface that can be written to.
pub trait SurfaceMut: Surface {
    /// Writes the pixel at the provided position.
    ///
    /// Bounds checking is up to the implementation.
    fn put_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Blends a color on top of the pixel at the provided position.
    ///
    /// # Parameters
    /// * `x`: The X-coordinate.
    /// * `y`: The Y-coordinate.
    /// * `color`: The color to blend on top.
    /// * `opacity`: The opacity of `color` in `[0, 1]`. See [`Color::blend`].
    fn put_pixel_alpha(&mut self, x: i32, y: i32, color: Color, opacity: f32) {
        let under = self.pixel(x, y);
        self.put_pixel(x, y, under.blend(color, opacity));
    }
}

/// A [`SurfaceMut`] backed by a row-major `Vec`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BufferSurface {
    data: Vec<Color>,
    size: Vector2<i32>,
}

impl BufferSurface {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `width`: The width in pixels.
    /// * `height`: The height in pixels.
    /// * `fill`: The initial color of every pixel.
    ///
    /// # Panics
    /// This function panics if `width` or `height` is negative.
    pub fn new(width: i32, height: i32, fill: Color) -> Self {
        let len = match Self::data_len(width, height) {
            Ok(len) => len,
            Err(err) => panic!("{}", err),
        };
        Self {
            data: vec![fill; len],
            size: Vector2::new(width, height),
        }
    }

    /// Creates a new instance from existing pixel data.
    ///
    /// # Parameters
    /// * `width`: The width in pixels.
    /// * `height`: The height in pixels.
    /// * `data`: The pixels in row-major order.
    pub fn from_data(width: i32, height: i32, data: Vec<Color>) -> Result<Self, SurfaceError> {
        let expected = Self::data_len(width, height)?;
        if data.len() != expected {
            return Err(SurfaceError::DataLength { expected, actual: data.len() });
        }
        Ok(Self {
            data,
            size: Vector2::new(width, height),
        })
    }

    fn data_len(width: i32, height: i32) -> Result<usize, SurfaceError> {
        let invalid = || SurfaceError::InvalidDimensions { width, height };
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        w.checked_mul(h).ok_or_else(invalid)
    }

    /// Retrieves the index into the data for the provided position.
    ///
    /// # Returns
    /// The index or `None` if the provided position is outside of the surface.
    #[inline(always)]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        // Both coordinates are non-negative and inside the surface at this point.
        Some(y as usize * self.size.x as usize + x as usize)
    }

    /// Retrieves a slice of the raw data.
    #[inline(always)]
    pub fn data(&self) -> &[Color] {
        &self.data
    }

    /// Retrieves a mutable slice of the raw data.
    #[inline(always)]
    pub fn data_mut(&mut self) -> &mut [Color] {
        &mut self.data
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    fn checked_index(&self, x: i32, y: i32) -> usize {
        match self.index(x, y) {
            Some(index) => index,
            None => panic!("Position ({}, {}) exceeds surface with dimensions {}.", x, y, self.size),
        }
    }
}

impl Surface for BufferSurface {
    #[inline(always)]
    fn size(&self) -> Vector2<i32> {
        self.size
    }

    /// # Panics
    /// This function panics if the position is outside of the surface.
    #[inline(always)]
    fn pixel(&self, x: i32, y: i32) -> Color {
        self.data[self.checked_index(x, y)]
    }
}

impl SurfaceMut for BufferSurface {
    /// # Panics
    /// This function panics if the position is outside of the surface.
    #[inline(always)]
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        let index = self.checked_index(x, y);
        self.data[index] = color;
    }
}
