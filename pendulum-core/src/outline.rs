use nalgebra::Point2;

use crate::{DomainError, Vector};

/// Padding around the arm segment, along and across the arm.
pub const ARM_PADDING: f64 = 8.0;

/// Rectangular outline of an arm, also its hit region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmOutline {
    corners: [Point2<f64>; 4],
}

impl ArmOutline {
    /// Construct the outline of `arm` rooted at `root`.
    ///
    /// Fails for a zero-length arm, it has no direction to pad along.
    pub fn new(root: &Vector, arm: &Vector) -> Result<Self, DomainError> {
        let length_padding = arm.normalize()?.scale(ARM_PADDING);
        let width_padding = length_padding.perpendicular();

        let root_edge = *root - length_padding;
        let tip_edge = *root + *arm + length_padding;

        Ok(Self {
            corners: [
                (root_edge + width_padding).to_cartesian(),
                (root_edge - width_padding).to_cartesian(),
                (tip_edge - width_padding).to_cartesian(),
                (tip_edge + width_padding).to_cartesian(),
            ],
        })
    }

    /// Corners in drawing order.
    #[inline]
    pub fn corners(&self) -> &[Point2<f64>; 4] {
        &self.corners
    }

    /// Test if the point lies inside the outline, edges included.
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        let mut sign = 0.0_f64;

        for i in 0..self.corners.len() {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % self.corners.len()];

            let cross = (b - a).perp(&(point - a));
            if cross == 0.0 {
                continue;
            }

            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_corners() {
        let outline =
            ArmOutline::new(&Vector::from_cartesian(0.0, 0.0), &Vector::new(100.0, 0.0)).unwrap();

        let expected = [(-8.0, 8.0), (-8.0, -8.0), (108.0, -8.0), (108.0, 8.0)];
        for (corner, (x, y)) in outline.corners().iter().zip(expected) {
            assert!((corner.x - x).abs() < 1e-9);
            assert!((corner.y - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_contains() {
        let outline = ArmOutline::new(
            &Vector::from_cartesian(50.0, 50.0),
            &Vector::new(100.0, FRAC_PI_2),
        )
        .unwrap();

        assert!(outline.contains(&Point2::new(50.0, 50.0)));
        assert!(outline.contains(&Point2::new(55.0, 120.0)));
        assert!(outline.contains(&Point2::new(50.0, 156.0)));
        assert!(!outline.contains(&Point2::new(60.0, 120.0)));
        assert!(!outline.contains(&Point2::new(50.0, 160.0)));
        assert!(!outline.contains(&Point2::new(50.0, 40.0)));
    }

    #[test]
    fn test_zero_arm() {
        let result = ArmOutline::new(&Vector::zero(), &Vector::zero());
        assert_eq!(result, Err(DomainError::ZeroVector));
    }
}
