use crate::error::{Error, Result};
use crate::pixel::{Pixel, PixelBuffer};

/// The 3x3 neighbourhood of a pixel, top row first, left to right.
pub type Window = [Pixel; 9];

/// Collect the 3x3 window centred at `(x, y)`.
///
/// Every neighbour must lie inside the buffer; border pixels therefore yield
/// [`Error::OutOfBounds`] rather than a clamped or partial window.
#[inline]
pub fn sample(buffer: &PixelBuffer, x: usize, y: usize) -> Result<Window> {
    let out_of_bounds = || Error::OutOfBounds {
        x,
        y,
        width: buffer.width(),
        height: buffer.height(),
    };

    let mut window = [Pixel::default(); 9];
    let mut idx = 0;
    for dy in -1isize..=1 {
        let sy = y.checked_add_signed(dy).ok_or_else(out_of_bounds)?;
        for dx in -1isize..=1 {
            let sx = x.checked_add_signed(dx).ok_or_else(out_of_bounds)?;
            window[idx] = buffer.get(sx, sy).ok_or_else(out_of_bounds)?;
            idx += 1;
        }
    }

    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, height: usize) -> PixelBuffer {
        let pixels = (0..width * height)
            .map(|i| Pixel::new(i as u8, (i * 2) as u8, (i * 3) as u8))
            .collect();
        PixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_window_is_row_major() {
        let buffer = numbered(5, 4);
        let window = sample(&buffer, 2, 1).unwrap();

        let reds: Vec<u8> = window.iter().map(|p| p.r).collect();
        assert_eq!(reds, vec![1, 2, 3, 6, 7, 8, 11, 12, 13]);
        assert_eq!(window[4], buffer[(2, 1)]);
    }

    #[test]
    fn test_window_at_last_interior_pixel() {
        let buffer = numbered(4, 4);
        let window = sample(&buffer, 2, 2).unwrap();

        assert_eq!(window[0], buffer[(1, 1)]);
        assert_eq!(window[8], buffer[(3, 3)]);
    }

    #[test]
    fn test_border_columns_are_out_of_bounds() {
        let buffer = numbered(4, 4);

        assert!(matches!(
            sample(&buffer, 0, 1),
            Err(Error::OutOfBounds { x: 0, y: 1, .. })
        ));
        assert!(matches!(
            sample(&buffer, 3, 1),
            Err(Error::OutOfBounds { x: 3, y: 1, .. })
        ));
    }

    #[test]
    fn test_border_rows_are_out_of_bounds() {
        let buffer = numbered(4, 4);

        assert!(matches!(
            sample(&buffer, 1, 0),
            Err(Error::OutOfBounds { x: 1, y: 0, width: 4, height: 4 })
        ));
        assert!(matches!(
            sample(&buffer, 1, 3),
            Err(Error::OutOfBounds { x: 1, y: 3, .. })
        ));
    }
}
