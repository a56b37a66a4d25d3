//! The initialization region: the small cube around the origin that the
//! first phase of a reboot is restricted to.

use std::borrow::Borrow;

use reboot_core::{AxisInterval, Cuboid, ToggleStep};

/// Half-width of the initialization region on every axis.
pub const INITIALIZATION_BOUND: i64 = 50;

const INITIALIZATION_AXIS: AxisInterval =
    match AxisInterval::new(-INITIALIZATION_BOUND, INITIALIZATION_BOUND) {
        Ok(axis) => axis,
        Err(_) => panic!("initialization bounds are inverted"),
    };

/// `x=-50..50,y=-50..50,z=-50..50`
pub const INITIALIZATION_REGION: Cuboid = Cuboid::new(
    INITIALIZATION_AXIS,
    INITIALIZATION_AXIS,
    INITIALIZATION_AXIS,
);

/// Returns true if the step lies entirely inside the initialization region.
///
/// Steps that only partly overlap it are not initialization steps.
pub fn is_initialization(step: &ToggleStep) -> bool {
    INITIALIZATION_REGION.contains(&step.cuboid)
}

/// Keep only the initialization steps, preserving order.
pub fn initialization_steps<I>(steps: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Borrow<ToggleStep>,
{
    steps
        .into_iter()
        .filter(|step| is_initialization(step.borrow()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::parse_steps;
    use reboot_core::parse_step;

    #[test]
    fn region_bounds() {
        assert_eq!(
            INITIALIZATION_REGION.to_string(),
            "x=-50..50,y=-50..50,z=-50..50"
        );
        assert_eq!(INITIALIZATION_REGION.volume(), Ok(101 * 101 * 101));
    }

    #[test]
    fn classifies_steps() {
        assert!(is_initialization(
            &parse_step("on x=-50..50,y=-50..50,z=-50..50").unwrap()
        ));
        assert!(is_initialization(
            &parse_step("off x=-5..5,y=0..0,z=49..50").unwrap()
        ));
        assert!(!is_initialization(
            &parse_step("on x=-54112..-39298,y=-85059..-49293,z=-27449..7877").unwrap()
        ));
        // Straddling the boundary does not count.
        assert!(!is_initialization(
            &parse_step("on x=40..51,y=0..0,z=0..0").unwrap()
        ));
    }

    #[test]
    fn filter_preserves_order() {
        let steps = parse_steps(
            "on x=0..1,y=0..1,z=0..1\n\
             on x=0..100,y=0..1,z=0..1\n\
             off x=1..1,y=1..1,z=1..1",
        )
        .unwrap();
        let kept: Vec<_> = initialization_steps(&steps).copied().collect();
        assert_eq!(kept, [steps[0], steps[2]]);
    }
}
