use crate::core::unit::{DegreeCelsius, Percent};

/// Circumference of the progress ring in the card's SVG geometry.
pub const CIRCUMFERENCE: f64 = 565.0;

/// Window within which the ring scales from empty to full.
const TOLERANCE: DegreeCelsius = DegreeCelsius(5.0);

/// How close the current temperature is to the target, as 0-100%.
/// Without a current reading the ring is fully reset.
pub fn closeness(current: Option<DegreeCelsius>, target: DegreeCelsius) -> Percent {
    match current {
        Some(current) => {
            let diff = (current - target).abs();
            Percent((1.0 - diff.0 / TOLERANCE.0) * 100.0).clamp()
        }
        None => Percent(0.0),
    }
}

/// Linear mapping of closeness onto the stroke offset: 0% shows an empty
/// ring (full offset), 100% a closed one (zero offset).
pub fn stroke_offset(closeness: Percent) -> f64 {
    CIRCUMFERENCE - (CIRCUMFERENCE * closeness.0 / 100.0)
}
