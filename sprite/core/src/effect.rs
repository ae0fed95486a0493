//! A module for pixel effects: the per-pixel decision of what, if anything, a sprite blit writes to the destination.
//!
//! Every effect implements [`PixelEffect`]. The blit driver (see [`crate::blit`]) calls [`PixelEffect::apply`] once for
//! every visible source pixel, with the destination position that pixel maps to. An effect writes zero, one or (for
//! [`SubstituteFade`]) two times to the destination.
//!
//! Except for [`CopyPixel`], every effect is configured with a chroma key: source pixels equal to that color are treated
//! as transparent (or, in the case of [`Substitution`], replaced).
//!
//! [`Effect`] is the closed set of all effects in this module, for when the effect is chosen at run time.

use crate::color::Color;
use crate::surface::SurfaceMut;

/// A per-pixel transform used during sprite blitting.
pub trait PixelEffect {
    /// Processes a single source pixel.
    ///
    /// # Parameters
    /// * `src`: The source pixel.
    /// * `x`: The X-coordinate in the destination.
    /// * `y`: The Y-coordinate in the destination.
    /// * `dest`: The destination surface.
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized;
}

/// Writes every source pixel as-is.
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CopyPixel;

impl PixelEffect for CopyPixel {
    #[inline(always)]
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized,
    {
        dest.put_pixel(x, y, src);
    }
}

/// Writes every source pixel as-is, except for the key color.
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ChromaKey {
    key: Color,
}

impl ChromaKey {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `key`: The transparent color.
    pub fn new(key: Color) -> Self {
        Self { key }
    }

    pub fn key(&self) -> Color {
        self.key
    }
}

impl Default for ChromaKey {
    fn default() -> Self {
        Self::new(Color::MAGENTA)
    }
}

impl PixelEffect for ChromaKey {
    #[inline(always)]
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized,
    {
        if src != self.key {
            dest.put_pixel(x, y, src);
        }
    }
}

/// Replaces key-colored pixels by a substitute color. All other pixels are written as-is.
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Substitution {
    key: Color,
    substitute: Color,
}

impl Substitution {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `key`: The color to replace.
    /// * `substitute`: The color to write instead of `key`.
    pub fn new(key: Color, substitute: Color) -> Self {
        Self { key, substitute }
    }

    pub fn key(&self) -> Color {
        self.key
    }

    pub fn substitute(&self) -> Color {
        self.substitute
    }
}

impl PixelEffect for Substitution {
    #[inline(always)]
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized,
    {
        let color = if src == self.key { self.substitute } else { src };
        dest.put_pixel(x, y, color);
    }
}

/// Paints every non-key pixel in a single color, e.g. for a "hit" flash.
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Silhouette {
    key: Color,
    fill: Color,
}

impl Silhouette {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `key`: The transparent color.
    /// * `fill`: The color for all other pixels.
    pub fn new(key: Color, fill: Color) -> Self {
        Self { key, fill }
    }
}

impl PixelEffect for Silhouette {
    #[inline(always)]
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized,
    {
        if src != self.key {
            dest.put_pixel(x, y, self.fill);
        }
    }
}

/// Blends every non-key pixel 50/50 with the destination.
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ghost {
    key: Color,
}

impl Ghost {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `key`: The transparent color.
    pub fn new(key: Color) -> Self {
        Self { key }
    }
}

impl PixelEffect for Ghost {
    #[inline(always)]
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized,
    {
        if src != self.key {
            let blend = src.average(dest.pixel(x, y));
            dest.put_pixel(x, y, blend);
        }
    }
}

/// Dissolves a sprite by scanline and tints the remaining pixels.
///
/// The destination rows are split in bands of [`DissolveHalfTint::BAND_HEIGHT`] rows. Only the first `percent` of the
/// rows in every band are drawn, as `src / 2 + tint / 2`. Animating `percent` from `1` to `0` makes a sprite fade out in
/// horizontal stripes (a dying enemy, for instance).
#[cfg_attr(
    feature = "serde_support",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "DissolveSettings", into = "DissolveSettings")
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DissolveHalfTint {
    key: Color,
    tint: Color,
    percent: f32,
    /// The tint with every channel halved.
    tint_pre: Color,
    /// The number of rows per band that get drawn.
    filled: i32,
}

impl DissolveHalfTint {
    /// The height of a band in rows. Must be a power of two.
    pub const BAND_HEIGHT: i32 = 4;
    const BAND_MASK: i32 = Self::BAND_HEIGHT - 1;

    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `key`: The transparent color.
    /// * `tint`: The tint color.
    /// * `percent`: The fraction of every band that is drawn, in `[0, 1]`.
    pub fn new(key: Color, tint: Color, percent: f32) -> Self {
        Self {
            key,
            tint,
            percent,
            tint_pre: tint.halved(),
            filled: (Self::BAND_HEIGHT as f32 * percent) as i32,
        }
    }

    /// The number of rows per band that get drawn.
    pub fn filled_rows(&self) -> i32 {
        self.filled
    }
}

impl PixelEffect for DissolveHalfTint {
    #[inline(always)]
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized,
    {
        if src != self.key && (y & Self::BAND_MASK) < self.filled {
            // Halved channels are at most 0x7F, so the sum can not carry into the next channel.
            let blend = Color::from_dword(self.tint_pre.dword() + src.halved().dword());
            dest.put_pixel(x, y, blend);
        }
    }
}

/// The user-facing configuration of a [`DissolveHalfTint`], without the precomputed values.
#[cfg(feature = "serde_support")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DissolveSettings {
    key: Color,
    tint: Color,
    percent: f32,
}

#[cfg(feature = "serde_support")]
impl From<DissolveSettings> for DissolveHalfTint {
    fn from(settings: DissolveSettings) -> Self {
        Self::new(settings.key, settings.tint, settings.percent)
    }
}

#[cfg(feature = "serde_support")]
impl From<DissolveHalfTint> for DissolveSettings {
    fn from(effect: DissolveHalfTint) -> Self {
        Self {
            key: effect.key,
            tint: effect.tint,
            percent: effect.percent,
        }
    }
}

/// Draws every non-key pixel and then blends a substitute color over it.
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SubstituteFade {
    key: Color,
    substitute: Color,
    opacity: f32,
}

impl SubstituteFade {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `key`: The transparent color.
    /// * `substitute`: The color to blend over the source.
    /// * `opacity`: The opacity of `substitute` in `[0, 1]`.
    pub fn new(key: Color, substitute: Color, opacity: f32) -> Self {
        Self { key, substitute, opacity }
    }
}

impl PixelEffect for SubstituteFade {
    #[inline(always)]
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized,
    {
        if src != self.key {
            dest.put_pixel(x, y, src);
            dest.put_pixel_alpha(x, y, self.substitute, self.opacity);
        }
    }
}

/// Draws every non-key pixel in grayscale (see [`Color::luma`]).
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BlackAndWhite {
    key: Color,
}

impl BlackAndWhite {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `key`: The transparent color.
    pub fn new(key: Color) -> Self {
        Self { key }
    }
}

impl PixelEffect for BlackAndWhite {
    #[inline(always)]
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized,
    {
        if src != self.key {
            dest.put_pixel(x, y, Color::gray(src.luma()));
        }
    }
}

/// Inverts the destination wherever the source is not the key color.
///
/// The source color itself is only used as a mask.
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Inverse {
    key: Color,
}

impl Inverse {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `key`: The transparent color.
    pub fn new(key: Color) -> Self {
        Self { key }
    }
}

impl PixelEffect for Inverse {
    #[inline(always)]
    fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
        S: SurfaceMut + ?Sized,
    {
        if src != self.key {
            let inverted = dest.pixel(x, y).inverted();
            dest.put_pixel(x, y, inverted);
        }
    }
}

macro_rules! effect_enum {
    ($($(#[doc = $doc:expr])* $variant:ident($ty:ty)),* $(,)?) => {
        /// Any of the effects in this module.
        #[cfg_attr(
            feature = "serde_support",
            derive(serde::Serialize, serde::Deserialize),
            serde(tag = "effect", rename_all = "snake_case")
        )]
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub enum Effect {
            $(
                $(#[doc = $doc])*
                $variant($ty),
            )*
        }

        impl PixelEffect for Effect {
            #[inline(always)]
            fn apply<S>(&self, src: Color, x: i32, y: i32, dest: &mut S) where
                S: SurfaceMut + ?Sized,
            {
                match self {
                    $(Self::$variant(effect) => effect.apply(src, x, y, dest),)*
                }
            }
        }

        $(
            impl From<$ty> for Effect {
                #[inline(always)]
                fn from(effect: $ty) -> Self {
                    Self::$variant(effect)
                }
            }
        )*
    }
}

effect_enum!(
    /// See [`CopyPixel`].
    Copy(CopyPixel),
    /// See [`ChromaKey`].
    Chroma(ChromaKey),
    /// See [`Substitution`].
    Substitution(Substitution),
    /// See [`Silhouette`].
    Silhouette(Silhouette),
    /// See [`Ghost`].
    Ghost(Ghost),
    /// See [`DissolveHalfTint`].
    Dissolve(DissolveHalfTint),
    /// See [`SubstituteFade`].
    Fade(SubstituteFade),
    /// See [`BlackAndWhite`].
    BlackAndWhite(BlackAndWhite),
    /// See [`Inverse`].
    Inverse(Inverse),
);
