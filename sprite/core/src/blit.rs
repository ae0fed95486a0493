//! A module for drawing sprites onto surfaces.

use log::{debug, trace};
use spritefx_geom::{Rectangle, Vector2};

use crate::effect::PixelEffect;
use crate::surface::{Surface, SurfaceMut};

/// Mirroring flags for a blit.
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Flip {
    /// A flag that specifies whether the sprite is flipped horizontally.
    pub horizontal: bool,
    /// A flag that specifies whether the sprite is flipped vertically.
    pub vertical: bool,
}

impl Flip {
    pub const NONE: Flip = Flip::new(false, false);

    #[inline(always)]
    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self { horizontal, vertical }
    }
}

/// Draws (a part of) a sprite onto a surface.
///
/// Every destination pixel that ends up visible gets exactly one call to [`PixelEffect::apply`] with the source pixel that
/// maps to it. Nothing outside of `clip` or the destination surface is touched.
///
/// # Parameters
/// * `dest`: The destination surface.
/// * `position`: The destination position of the top-left corner of `source_rect`.
/// * `source_rect`: The area of the sprite to draw. It is clamped to the sprite. The remaining pixels are drawn where
///   they would have been without clamping, also when flipped.
/// * `clip`: The area of the destination that may be written. It is clamped to the destination surface.
/// * `sprite`: The source surface.
/// * `effect`: The effect that decides what gets written.
/// * `flip`: Mirroring of the source area.
///
/// # Returns
/// The number of pixels that were passed to the effect.
pub fn draw_sprite<D, S, E>(
    dest: &mut D,
    position: Vector2<i32>,
    source_rect: Rectangle<i32>,
    clip: Rectangle<i32>,
    sprite: &S,
    effect: &E,
    flip: Flip,
) -> usize where
    D: SurfaceMut + ?Sized,
    S: Surface + ?Sized,
    E: PixelEffect,
{
    let source = source_rect.clipped(&sprite.rect());
    let clip = clip.clipped(&dest.rect());
    if source.is_empty() || clip.is_empty() {
        debug!("Sprite area {:?} is not visible inside {:?}.", source_rect, clip);
        return 0;
    }

    let target = match footprint(position, source_rect, source, flip) {
        Some(target) => target,
        None => {
            debug!("Sprite area {:?} at {} lies outside of the coordinate range.", source_rect, position);
            return 0;
        }
    };
    let visible = target.clipped(&clip);
    if visible.is_empty() {
        debug!("Sprite area {:?} at {} is not visible inside {:?}.", source_rect, position, clip);
        return 0;
    }

    for y in visible.top..visible.bottom {
        let dy = y - target.top;
        let src_y = if flip.vertical { source.bottom - 1 - dy } else { source.top + dy };
        for x in visible.left..visible.right {
            let dx = x - target.left;
            let src_x = if flip.horizontal { source.right - 1 - dx } else { source.left + dx };
            effect.apply(sprite.pixel(src_x, src_y), x, y, dest);
        }
    }

    // Both dimensions are positive at this point.
    let count = visible.width() as usize * visible.height() as usize;
    trace!("Drew {} pixels of sprite area {:?} into {:?}.", count, source, visible);
    count
}

/// Determines the destination area of the clamped (non-empty) `source`.
///
/// Clamping removes pixels from one side of `source_rect`. With a flip, that side ends up on the opposite side of the
/// destination, so the offset is taken from the far edge.
///
/// # Returns
/// The area or `None` if it does not fit in `i32` coordinates.
fn footprint(
    position: Vector2<i32>,
    source_rect: Rectangle<i32>,
    source: Rectangle<i32>,
    flip: Flip,
) -> Option<Rectangle<i32>> {
    let offset_x = if flip.horizontal {
        source_rect.right.checked_sub(source.right)?
    } else {
        source.left.checked_sub(source_rect.left)?
    };
    let offset_y = if flip.vertical {
        source_rect.bottom.checked_sub(source.bottom)?
    } else {
        source.top.checked_sub(source_rect.top)?
    };
    let left = position.x.checked_add(offset_x)?;
    let top = position.y.checked_add(offset_y)?;
    Some(Rectangle::new(
        left,
        left.checked_add(source.width())?,
        top,
        top.checked_add(source.height())?,
    ))
}

/// Draws an entire sprite onto a surface, without clipping other than to the destination.
///
/// See [`draw_sprite`].
pub fn draw_sprite_at<D, S, E>(dest: &mut D, position: Vector2<i32>, sprite: &S, effect: &E) -> usize where
    D: SurfaceMut + ?Sized,
    S: Surface + ?Sized,
    E: PixelEffect,
{
    let clip = dest.rect();
    draw_sprite(dest, position, sprite.rect(), clip, sprite, effect, Flip::NONE)
}
