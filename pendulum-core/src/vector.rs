use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Planar vector in polar form.
///
/// The length is never negative. Operations that would produce a negative
/// magnitude fold the sign into the angle instead, rotating it by half a turn.
/// Every operation returns a new value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    length: f64,
    angle: f64,
}

impl Vector {
    /// Construct a vector from a magnitude and an angle in radians.
    pub fn new(length: f64, angle: f64) -> Self {
        if length < 0.0 {
            Self {
                length: -length,
                angle: angle + PI,
            }
        } else {
            Self { length, angle }
        }
    }

    /// Zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Construct a vector from Cartesian coordinates.
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self {
            length: x.hypot(y),
            angle: y.atan2(x),
        }
    }

    /// Construct a vector from the position of a point relative to the origin.
    #[inline]
    pub fn from_point(point: &Point2<f64>) -> Self {
        Self::from_cartesian(point.x, point.y)
    }

    /// Cartesian coordinates of the vector tip.
    pub fn to_cartesian(&self) -> Point2<f64> {
        Point2::new(
            self.length * self.angle.cos(),
            self.length * self.angle.sin(),
        )
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Sum of two vectors, computed in Cartesian space.
    pub fn add(&self, other: &Vector) -> Vector {
        let a = self.to_cartesian();
        let b = other.to_cartesian();
        Vector::from_cartesian(a.x + b.x, a.y + b.y)
    }

    /// Difference of two vectors.
    pub fn subtract(&self, other: &Vector) -> Vector {
        self.add(&other.scale(-1.0))
    }

    /// Scale the magnitude. A negative factor flips the angle by π.
    pub fn scale(&self, factor: f64) -> Vector {
        Vector::new(self.length * factor, self.angle)
    }

    /// Unit vector with the same angle.
    pub fn normalize(&self) -> Result<Vector, DomainError> {
        if self.length == 0.0 {
            return Err(DomainError::ZeroVector);
        }

        Ok(Vector::new(1.0, self.angle))
    }

    /// Same length, rotated a quarter turn counterclockwise.
    pub fn perpendicular(&self) -> Vector {
        Vector::new(self.length, self.angle + FRAC_PI_2)
    }

    /// Angle of this vector minus the angle of `other`.
    ///
    /// The difference is not reduced modulo 2π.
    #[inline]
    pub fn angle_difference(&self, other: &Vector) -> f64 {
        self.angle - other.angle
    }

    /// Same length, replaced angle.
    pub fn with_angle(&self, angle: f64) -> Vector {
        Vector::new(self.length, angle)
    }

    /// Same angle, length clamped into `[|min|, |max|]`.
    ///
    /// Bounds may be given in either order.
    pub fn clamp_length(&self, min: f64, max: f64) -> Vector {
        let (lower, upper) = {
            let (a, b) = (min.abs(), max.abs());
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };

        Vector::new(self.length.clamp(lower, upper), self.angle)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(&self, &rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(&rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} @ {:5.2}rad {:5.2}°",
            self.length,
            self.angle,
            self.angle.to_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_point_eq(a: Point2<f64>, b: Point2<f64>) {
        assert!((a.x - b.x).abs() < EPSILON, "{} != {}", a, b);
        assert!((a.y - b.y).abs() < EPSILON, "{} != {}", a, b);
    }

    #[test]
    fn test_cartesian_round_trip() {
        for (x, y) in [(3.0, 4.0), (-2.5, 7.0), (-1.0, -1.0), (0.0, -9.0), (250.0, 0.1)] {
            let v = Vector::from_cartesian(x, y);
            assert_point_eq(v.to_cartesian(), Point2::new(x, y));
        }
    }

    #[test]
    fn test_from_cartesian_polar_form() {
        let v = Vector::from_cartesian(0.0, 2.0);
        assert!((v.length() - 2.0).abs() < EPSILON);
        assert!((v.angle() - FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_add_commutative_associative() {
        let a = Vector::new(3.0, 0.3);
        let b = Vector::new(5.5, -2.1);
        let c = Vector::new(1.2, 4.0);

        assert_point_eq((a + b).to_cartesian(), (b + a).to_cartesian());
        assert_point_eq(((a + b) + c).to_cartesian(), (a + (b + c)).to_cartesian());
    }

    #[test]
    fn test_subtract_self() {
        let v = Vector::new(85.0, -PI / 5.0);
        assert!((v - v).length() < EPSILON);
    }

    #[test]
    fn test_scale_negative_folds_angle() {
        let v = Vector::new(2.0, 0.5).scale(-3.0);
        assert!((v.length() - 6.0).abs() < EPSILON);
        assert!((v.angle() - (0.5 + PI)).abs() < EPSILON);

        let v = Vector::new(2.0, 0.5) * 0.5;
        assert!((v.length() - 1.0).abs() < EPSILON);
        assert_eq!(v.angle(), 0.5);
    }

    #[test]
    fn test_new_negative_length() {
        let v = Vector::new(-4.0, 0.0);
        assert_eq!(v.length(), 4.0);
        assert!((v.angle() - PI).abs() < EPSILON);
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new(42.0, 1.1).normalize().unwrap();
        assert_eq!(v.length(), 1.0);
        assert_eq!(v.angle(), 1.1);

        assert_eq!(Vector::zero().normalize(), Err(DomainError::ZeroVector));
    }

    #[test]
    fn test_perpendicular() {
        let v = Vector::from_cartesian(1.0, 0.0).perpendicular();
        assert_point_eq(v.to_cartesian(), Point2::new(0.0, 1.0));
    }

    #[test]
    fn test_angle_difference_unreduced() {
        let a = Vector::new(1.0, 3.0 * PI);
        let b = Vector::new(1.0, -PI);
        assert!((a.angle_difference(&b) - 4.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_clamp_length() {
        let v = Vector::new(10.0, 0.7);
        assert_eq!(v.clamp_length(2.0, 5.0).length(), 5.0);
        assert_eq!(v.clamp_length(5.0, 2.0).length(), 5.0);
        assert_eq!(v.clamp_length(-20.0, 30.0).length(), 20.0);
        assert_eq!(v.clamp_length(-20.0, 30.0).angle(), 0.7);
        assert_eq!(v.clamp_length(1.0, 50.0), v);
    }

    #[test]
    fn test_with_angle() {
        let v = Vector::new(3.0, 0.1).with_angle(2.0);
        assert_eq!(v, Vector::new(3.0, 2.0));
    }
}
