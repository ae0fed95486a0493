//! Conversion between BMP images and surfaces.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::debug;
use spritefx_core::{BufferSurface, Color, Surface};

/// Loads a BMP file into a new surface.
pub fn load(path: &Path) -> Result<BufferSurface> {
    let image = bmp::open(path).map_err(|err| anyhow!("Could not read {}: {}", path.display(), err))?;
    debug!("Loaded {}x{} image from {}.", image.get_width(), image.get_height(), path.display());
    image_to_surface(&image).with_context(|| format!("Could not convert {}", path.display()))
}

/// Writes a surface to a BMP file.
pub fn save(surface: &(impl Surface + ?Sized), path: &Path) -> Result<()> {
    let image = surface_to_image(surface);
    image.save(path).with_context(|| format!("Could not write {}", path.display()))?;
    debug!("Wrote {}x{} image to {}.", image.get_width(), image.get_height(), path.display());
    Ok(())
}

pub fn image_to_surface(image: &bmp::Image) -> Result<BufferSurface> {
    let width = i32::try_from(image.get_width())?;
    let height = i32::try_from(image.get_height())?;
    let mut data = Vec::with_capacity(image.get_width() as usize * image.get_height() as usize);
    for y in 0..image.get_height() {
        for x in 0..image.get_width() {
            let px = image.get_pixel(x, y);
            data.push(Color::new(px.r, px.g, px.b));
        }
    }
    Ok(BufferSurface::from_data(width, height, data)?)
}

pub fn surface_to_image(surface: &(impl Surface + ?Sized)) -> bmp::Image {
    let size = surface.size();
    // Surface dimensions are never negative.
    let mut image = bmp::Image::new(size.x as u32, size.y as u32);
    for (x, y) in image.coordinates() {
        let color = surface.pixel(x as i32, y as i32);
        image.set_pixel(x, y, bmp::Pixel::new(color.r(), color.g(), color.b()));
    }
    image
}

#[cfg(test)]
mod test_bitmap {
    use spritefx_core::{BufferSurface, Color, Surface, SurfaceMut};
    use spritefx_geom::Vector2;

    use super::{image_to_surface, surface_to_image};

    #[test]
    fn test_surface_to_image() {
        let mut surface = BufferSurface::new(3, 2, Color::BLACK);
        surface.put_pixel(2, 0, Color::new(10, 20, 30));
        surface.put_pixel(0, 1, Color::WHITE);

        let image = surface_to_image(&surface);
        assert_eq!(3, image.get_width());
        assert_eq!(2, image.get_height());
        assert_eq!(bmp::Pixel::new(10, 20, 30), image.get_pixel(2, 0));
        assert_eq!(bmp::Pixel::new(255, 255, 255), image.get_pixel(0, 1));
        assert_eq!(bmp::Pixel::new(0, 0, 0), image.get_pixel(1, 1));
    }

    #[test]
    fn test_image_to_surface() {
        let mut image = bmp::Image::new(2, 3);
        image.set_pixel(1, 2, bmp::Pixel::new(255, 0, 255));

        let surface = image_to_surface(&image).unwrap();
        assert_eq!(Vector2::new(2, 3), surface.size());
        assert_eq!(Color::MAGENTA, surface.pixel(1, 2));
        assert_eq!(Color::BLACK, surface.pixel(0, 0));
    }
}
