use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One 8-bit RGB sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pixel with the same value in every channel.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }
}

/// Row-major RGB image: `pixels[y * width + x]` is column `x` of row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixels length must equal width * height"
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn new_filled(width: usize, height: usize, value: Pixel) -> Self {
        Self {
            pixels: vec![value; width * height],
            width,
            height,
        }
    }

    pub fn new_default(width: usize, height: usize) -> Self {
        Self::new_filled(width, height, Pixel::default())
    }

    /// Bounds-checked access. Returns `None` outside `[0, width) x [0, height)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[Pixel] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// True for pixels in the outermost row or column.
    #[inline]
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }
}

impl Index<(usize, usize)> for PixelBuffer {
    type Output = Pixel;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        debug_assert!(x < self.width && y < self.height);
        &self.pixels[y * self.width + x]
    }
}

impl IndexMut<(usize, usize)> for PixelBuffer {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        debug_assert!(x < self.width && y < self.height);
        &mut self.pixels[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let pixels: Vec<Pixel> = (0..6).map(Pixel::gray).collect();
        let buffer = PixelBuffer::new(3, 2, pixels);

        assert_eq!(buffer[(0, 0)], Pixel::gray(0));
        assert_eq!(buffer[(2, 0)], Pixel::gray(2));
        assert_eq!(buffer[(0, 1)], Pixel::gray(3));
        assert_eq!(buffer.row(1), &[Pixel::gray(3), Pixel::gray(4), Pixel::gray(5)]);
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let buffer = PixelBuffer::new_filled(4, 3, Pixel::new(1, 2, 3));

        assert_eq!(buffer.get(3, 2), Some(Pixel::new(1, 2, 3)));
        assert_eq!(buffer.get(4, 0), None);
        assert_eq!(buffer.get(0, 3), None);
        assert_eq!(buffer.get(usize::MAX, 1), None);
    }

    #[test]
    fn test_index_mut_writes_single_pixel() {
        let mut buffer = PixelBuffer::new_default(3, 3);
        buffer[(1, 2)] = Pixel::new(9, 8, 7);

        assert_eq!(buffer.pixels()[7], Pixel::new(9, 8, 7));
        assert_eq!(buffer.pixels().iter().filter(|p| **p == Pixel::BLACK).count(), 8);
    }

    #[test]
    fn test_is_border() {
        let buffer = PixelBuffer::new_default(4, 3);

        assert!(buffer.is_border(0, 1));
        assert!(buffer.is_border(3, 1));
        assert!(buffer.is_border(2, 0));
        assert!(buffer.is_border(2, 2));
        assert!(!buffer.is_border(1, 1));
        assert!(!buffer.is_border(2, 1));
    }

    #[test]
    #[should_panic(expected = "pixels length must equal width * height")]
    fn test_new_rejects_wrong_length() {
        PixelBuffer::new(2, 2, vec![Pixel::BLACK; 3]);
    }
}
