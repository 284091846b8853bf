//! Reading and writing raster files.
//!
//! Any container the `image` crate can sniff is accepted on input and
//! normalised to 8-bit RGBA before alpha is discarded. Output is always RGBA8
//! with a fully opaque alpha channel; the container is chosen from the output
//! file extension.


use std::path::Path;

use image::{ImageError, ImageReader, Rgba, RgbaImage};

use crate::error::{Error, Result};
use crate::pixel::{Pixel, PixelBuffer};

pub fn decode(path: &Path) -> Result<PixelBuffer> {
    let file_open = |source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(file_open)?
        .with_guessed_format()
        .map_err(file_open)?;

    let decoded = reader.decode().map_err(|source| match source {
        ImageError::IoError(source) => file_open(source),
        source => Error::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    let pixels = rgba
        .pixels()
        .map(|&Rgba([r, g, b, _])| Pixel::new(r, g, b))
        .collect();

    tracing::debug!(path = %path.display(), width, height, "Decoded image");
    Ok(PixelBuffer::new(width, height, pixels))
}

pub fn encode(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let width = u32::try_from(buffer.width()).map_err(|_| {
        Error::InvalidConfiguration(format!("image width {} is too large", buffer.width()))
    })?;
    let height = u32::try_from(buffer.height()).map_err(|_| {
        Error::InvalidConfiguration(format!("image height {} is too large", buffer.height()))
    })?;

    let image = RgbaImage::from_fn(width, height, |x, y| {
        let p = buffer[(x as usize, y as usize)];
        Rgba([p.r, p.g, p.b, u8::MAX])
    });

    image.save(path).map_err(|source| match source {
        ImageError::IoError(source) => Error::FileOpen {
            path: path.to_path_buf(),
            source,
        },
        source => Error::Encode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    tracing::debug!(path = %path.display(), width, height, "Encoded image");
    Ok(())
}
