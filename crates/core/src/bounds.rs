//! Quality bounds shared across the domain.

/// Lowest quality any item may hold.
pub const QUALITY_FLOOR: i32 = 0;

/// Highest quality any non-legendary item may hold.
pub const QUALITY_CAP: i32 = 50;

/// Conventional quality of legendary items. Never enforced: legendary items
/// are exempt from the cap at construction and are never mutated afterwards.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Clamped quality adjustment used by every non-legendary rule step.
pub fn clamp_quality(quality: i32, delta: i32) -> i32 {
    quality.saturating_add(delta).clamp(QUALITY_FLOOR, QUALITY_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_holds_the_floor() {
        assert_eq!(clamp_quality(0, -1), 0);
        assert_eq!(clamp_quality(1, -2), 0);
    }

    #[test]
    fn clamp_holds_the_cap() {
        assert_eq!(clamp_quality(50, 1), 50);
        assert_eq!(clamp_quality(49, 3), 50);
    }

    #[test]
    fn clamp_passes_in_range_adjustments_through() {
        assert_eq!(clamp_quality(20, -1), 19);
        assert_eq!(clamp_quality(20, 3), 23);
    }
}
