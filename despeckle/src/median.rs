use crate::pixel::Pixel;
use crate::window::Window;

/// Per-channel median of a 3x3 window.
///
/// Each channel is sorted on its own, so the result may combine channels that
/// came from different neighbours.
#[inline]
pub fn reduce(window: &Window) -> Pixel {
    let mut r = [0u8; 9];
    let mut g = [0u8; 9];
    let mut b = [0u8; 9];
    for (i, p) in window.iter().enumerate() {
        r[i] = p.r;
        g[i] = p.g;
        b[i] = p.b;
    }

    Pixel {
        r: median9(&mut r),
        g: median9(&mut g),
        b: median9(&mut b),
    }
}

/// Fifth-smallest of nine values.
#[inline]
fn median9(values: &mut [u8; 9]) -> u8 {
    values.sort_unstable();
    values[4]
}
