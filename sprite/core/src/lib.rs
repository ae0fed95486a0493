//! Sprite blitting with per-pixel effects.
//!
//! * [`color`]: The [`Color`] type.
//! * [`surface`]: The [`Surface`]/[`SurfaceMut`] traits for reading and writing pixels, and [`BufferSurface`].
//! * [`effect`]: The [`PixelEffect`] trait and the available effects.
//! * [`blit`]: Drawing (a part of) a sprite onto a surface through an effect.

pub mod blit;
pub mod color;
pub mod effect;
pub mod error;
pub mod surface;
#[cfg(test)]
pub(crate) mod test_util;

pub use spritefx_geom as geom;

pub use blit::{draw_sprite, draw_sprite_at, Flip};
pub use color::Color;
pub use effect::{Effect, PixelEffect};
pub use surface::{BufferSurface, Surface, SurfaceMut};

/// Declares a fixed-size, array-backed [`SurfaceMut`] type.
///
/// # Parameters
/// * `vis`: The visibility of the type.
/// * `name`: The type name.
/// * `width`: The width in pixels.
/// * `height`: The height in pixels.
/// * `default_value`: The initial [`Color`] of every pixel.
///
/// ```
/// use spritefx_core::{Color, Surface, SurfaceMut};
///
/// spritefx_core::sized_surface!(Screen, 16, 8, Color::BLACK);
///
/// let mut screen = Screen::new();
/// screen.put_pixel(15, 7, Color::RED);
/// assert_eq!(Color::RED, screen.pixel(15, 7));
/// ```
#[macro_export]
macro_rules! sized_surface {
    ($vis:vis $name:ident, $width:expr, $height:expr, $default_value:expr) => {
        #[doc = concat!("A fixed-size surface of ", stringify!($width), "x", stringify!($height), " pixels.")]
        #[derive(Clone, Debug, Eq, PartialEq)]
        $vis struct $name {
            data: [$crate::color::Color; ($width) * ($height)],
        }

        impl $name {
            /// Creates a new instance.
            pub fn new() -> Self {
                Self {
                    data: [$default_value; ($width) * ($height)],
                }
            }

            /// Retrieves a slice of the raw data.
            pub fn data(&self) -> &[$crate::color::Color] {
                &self.data
            }

            fn index(x: i32, y: i32) -> usize {
                if x < 0 || y < 0 || x as usize >= ($width) || y as usize >= ($height) {
                    panic!("Position ({}, {}) exceeds surface with dimensions {}x{}.", x, y, $width, $height);
                }
                y as usize * ($width) + x as usize
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::surface::Surface for $name {
            #[inline(always)]
            fn size(&self) -> $crate::geom::Vector2<i32> {
                $crate::geom::Vector2::new(($width) as i32, ($height) as i32)
            }

            #[inline(always)]
            fn pixel(&self, x: i32, y: i32) -> $crate::color::Color {
                self.data[Self::index(x, y)]
            }
        }

        impl $crate::surface::SurfaceMut for $name {
            #[inline(always)]
            fn put_pixel(&mut self, x: i32, y: i32, color: $crate::color::Color) {
                self.data[Self::index(x, y)] = color;
            }
        }
    }
}
