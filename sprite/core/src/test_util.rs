use spritefx_geom::Vector2;

use crate::color::Color;
use crate::surface::{BufferSurface, Surface, SurfaceMut};

/// A write to a [`RecordingSurface`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Write {
    Opaque(i32, i32, Color),
    Alpha(i32, i32, Color, f32),
}

/// A [`SurfaceMut`] that keeps a log of all writes.
pub struct RecordingSurface {
    inner: BufferSurface,
    writes: Vec<Write>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32, fill: Color) -> Self {
        Self {
            inner: BufferSurface::new(width, height, fill),
            writes: Vec::new(),
        }
    }

    pub fn writes(&self) -> &[Write] {
        &self.writes
    }

    /// Reads a pixel without going through the [`Surface`] trait.
    pub fn color(&self, x: i32, y: i32) -> Color {
        self.inner.pixel(x, y)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vector2<i32> {
        self.inner.size()
    }

    fn pixel(&self, x: i32, y: i32) -> Color {
        self.inner.pixel(x, y)
    }
}

impl SurfaceMut for RecordingSurface {
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.writes.push(Write::Opaque(x, y, color));
        self.inner.put_pixel(x, y, color);
    }

    fn put_pixel_alpha(&mut self, x: i32, y: i32, color: Color, opacity: f32) {
        self.writes.push(Write::Alpha(x, y, color, opacity));
        self.inner.put_pixel_alpha(x, y, color, opacity);
    }
}

/// Creates a [`BufferSurface`] from rows of palette indices, for readable test fixtures.
pub fn surface_from_rows<const W: usize, const H: usize>(rows: [[u8; W]; H], palette: &[Color]) -> BufferSurface {
    let data = rows.iter()
        .flat_map(|row| row.iter())
        .map(|index| palette[usize::from(*index)])
        .collect();
    BufferSurface::from_data(W as i32, H as i32, data).unwrap()
}
