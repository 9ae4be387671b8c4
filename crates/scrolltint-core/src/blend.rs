use crate::rgb::Rgb;

/// Blends `from` toward `to` by `t`, rounding each channel to the nearest
/// integer (halves round up).
///
/// `t = 0` yields `from` exactly. Channels always stay between the two
/// endpoints for `t` in `[0, 1]`.
pub fn blend(from: Rgb, to: Rgb, t: f64) -> Rgb {
    Rgb::new(
        blend_channel(from.r, to.r, t),
        blend_channel(from.g, to.g, t),
        blend_channel(from.b, to.b, t),
    )
}

#[inline]
fn blend_channel(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (f64::from(a), f64::from(b));
    let v = a - (a - b) * t;
    // `floor(v + 0.5)` rounds halves up for negative intermediate deltas too.
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn midpoint_rounds_halves_up() {
        // 255 - 255 * 0.5 = 127.5 -> 128 ; 0 + 255 * 0.5 = 127.5 -> 128
        assert_eq!(blend(RED, BLUE, 0.5), Rgb::new(128, 0, 128));
    }

    #[test]
    fn zero_is_the_start_color() {
        assert_eq!(blend(RED, BLUE, 0.0), RED);
    }

    #[test]
    fn one_is_the_end_color() {
        assert_eq!(blend(RED, BLUE, 1.0), BLUE);
    }

    #[test]
    fn channels_stay_between_endpoints() {
        let a = Rgb::new(10, 200, 90);
        let b = Rgb::new(250, 20, 90);
        for step in 0..=100 {
            let c = blend(a, b, f64::from(step) / 100.0);
            assert!((10..=250).contains(&c.r));
            assert!((20..=200).contains(&c.g));
            assert_eq!(c.b, 90);
        }
    }

    #[test]
    fn out_of_range_t_is_clamped_to_channel_bounds() {
        assert_eq!(blend(RED, BLUE, 2.0), Rgb::new(0, 0, 255));
        assert_eq!(blend(RED, BLUE, -1.0), Rgb::new(255, 0, 0));
    }
}
