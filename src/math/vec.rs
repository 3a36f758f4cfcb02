use super::Float;

use serde::{Deserialize, Serialize};

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Float; 2]", into = "[Float; 2]")]
pub struct Vec2 {
    pub x: Float,
    pub y: Float,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Float; 3]", into = "[Float; 3]")]
pub struct Vec3 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

// generates the componentwise operator impls for (vec, vec), (vec, scalar) and (scalar, vec)
macro_rules! componentwise_ops {
    (@op $ty:ident { $($field:ident),+ }
        $trait:ident $method:ident $assign_trait:ident $assign_method:ident $op:tt) => {
        impl $trait for $ty {
            type Output = $ty;
            fn $method(self, other: $ty) -> $ty {
                $ty { $($field: self.$field $op other.$field),+ }
            }
        }

        impl $trait<Float> for $ty {
            type Output = $ty;
            fn $method(self, other: Float) -> $ty {
                $ty { $($field: self.$field $op other),+ }
            }
        }

        impl $trait<$ty> for Float {
            type Output = $ty;
            fn $method(self, other: $ty) -> $ty {
                $ty { $($field: self $op other.$field),+ }
            }
        }

        impl $assign_trait for $ty {
            fn $assign_method(&mut self, other: $ty) {
                *self = *self $op other;
            }
        }

        impl $assign_trait<Float> for $ty {
            fn $assign_method(&mut self, other: Float) {
                *self = *self $op other;
            }
        }
    };
    ($ty:ident { $($field:ident),+ }) => {
        componentwise_ops!(@op $ty { $($field),+ } Add add AddAssign add_assign +);
        componentwise_ops!(@op $ty { $($field),+ } Sub sub SubAssign sub_assign -);
        componentwise_ops!(@op $ty { $($field),+ } Mul mul MulAssign mul_assign *);
        componentwise_ops!(@op $ty { $($field),+ } Div div DivAssign div_assign /);

        impl Neg for $ty {
            type Output = $ty;
            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }

        impl From<Float> for $ty {
            fn from(s: Float) -> $ty {
                $ty { $($field: s),+ }
            }
        }
    };
}

componentwise_ops!(Vec2 { x, y });
componentwise_ops!(Vec3 { x, y, z });

impl Vec2 {
    pub const fn new(x: Float, y: Float) -> Vec2 {
        Vec2 { x, y }
    }
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub fn dot(&self, other: Vec2) -> Float {
        self.x * other.x + self.y * other.y
    }

    /// z component of the cross product of the two vectors embedded in the z = 0 plane.
    pub fn cross(&self, other: Vec2) -> Float {
        self.x * other.y - other.x * self.y
    }

    pub fn norm_squared(&self) -> Float {
        self.dot(*self)
    }

    pub fn norm(&self) -> Float {
        self.norm_squared().sqrt()
    }

    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    pub fn pow(&self, other: Vec2) -> Self {
        Vec2::new(self.x.powf(other.x), self.y.powf(other.y))
    }

    pub fn powf(&self, p: Float) -> Self {
        Vec2::new(self.x.powf(p), self.y.powf(p))
    }

    pub fn reflect(&self, normal: Vec2) -> Self {
        *self - 2.0 * self.dot(normal) * normal
    }
}

impl Vec3 {
    pub const fn new(x: Float, y: Float, z: Float) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub const fn from_vec2(v: Vec2, z: Float) -> Vec3 {
        Vec3::new(v.x, v.y, z)
    }

    pub fn dot(&self, other: Vec3) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vec3) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm_squared(&self) -> Float {
        self.dot(*self)
    }

    pub fn norm(&self) -> Float {
        self.norm_squared().sqrt()
    }

    /// Returns a new unit length vector. A zero vector yields NaN in every component.
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    /// Like `normalized`, but returns `None` when the length is zero or not finite.
    pub fn try_normalized(&self) -> Option<Self> {
        let norm = self.norm();
        if norm > 0.0 && norm.is_finite() {
            Some(*self / norm)
        } else {
            None
        }
    }

    pub fn pow(&self, other: Vec3) -> Self {
        Vec3::new(
            self.x.powf(other.x),
            self.y.powf(other.y),
            self.z.powf(other.z),
        )
    }

    pub fn powf(&self, p: Float) -> Self {
        Vec3::new(self.x.powf(p), self.y.powf(p), self.z.powf(p))
    }

    /// `v - 2 (v . n) n`. `normal` is expected to be unit length.
    pub fn reflect(&self, normal: Vec3) -> Self {
        *self - 2.0 * self.dot(normal) * normal
    }

    pub fn map(&self, f: impl Fn(Float) -> Float) -> Self {
        Vec3::new(f(self.x), f(self.y), f(self.z))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl From<[Float; 2]> for Vec2 {
    fn from(v: [Float; 2]) -> Vec2 {
        Vec2::new(v[0], v[1])
    }
}

impl From<Vec2> for [Float; 2] {
    fn from(v: Vec2) -> [Float; 2] {
        [v.x, v.y]
    }
}

impl From<[Float; 3]> for Vec3 {
    fn from(v: [Float; 3]) -> Vec3 {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [Float; 3] {
    fn from(v: Vec3) -> [Float; 3] {
        [v.x, v.y, v.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Float = 1e-12;

    #[test]
    fn test_normalized_has_unit_length() {
        let vectors = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.001, 0.0, 0.0),
            Vec3::new(1e6, -4e5, 3.0),
            Vec3::new(1.0, -0.4, 0.7),
        ];
        for v in vectors {
            assert!((v.normalized().norm() - 1.0).abs() < EPS, "{:?}", v);
        }
        assert!((Vec2::new(3.0, -4.0).normalized().norm() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_normalized_does_not_alias() {
        let v = Vec3::new(0.0, 3.0, 4.0);
        let n = v.normalized();
        assert_eq!(v, Vec3::new(0.0, 3.0, 4.0));
        assert_eq!(n, Vec3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn test_zero_vector_normalization() {
        let n = Vec3::ZERO.normalized();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
        assert!(Vec3::ZERO.try_normalized().is_none());
        assert!(Vec3::new(Float::INFINITY, 0.0, 0.0)
            .try_normalized()
            .is_none());
        assert_eq!(Vec3::X.try_normalized(), Some(Vec3::X));
    }

    #[test]
    fn test_scalar_broadcast() {
        let v = Vec3::new(1.0, 2.0, 4.0);
        assert_eq!(v + 1.0, Vec3::new(2.0, 3.0, 5.0));
        assert_eq!(1.0 + v, Vec3::new(2.0, 3.0, 5.0));
        assert_eq!(v - 1.0, Vec3::new(0.0, 1.0, 3.0));
        assert_eq!(2.0 * v, Vec3::new(2.0, 4.0, 8.0));
        assert_eq!(v / 2.0, Vec3::new(0.5, 1.0, 2.0));
        assert_eq!(v.powf(2.0), Vec3::new(1.0, 4.0, 16.0));
        assert_eq!(-v, Vec3::new(-1.0, -2.0, -4.0));
        assert_eq!(Vec2::new(1.0, 2.0) * 3.0, Vec2::new(3.0, 6.0));
    }

    #[test]
    fn test_componentwise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a.pow(Vec3::new(2.0, 0.0, 1.0)), Vec3::new(1.0, 1.0, 3.0));

        let mut c = a;
        c *= 0.5;
        c += b;
        assert_eq!(c, Vec3::new(4.5, 6.0, 7.5));
    }

    #[test]
    fn test_dot_and_cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, -5.0, 6.0)), 12.0);

        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(a.dot(b), 0.0);
    }

    #[test]
    fn test_reflect() {
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(incoming.reflect(Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(
            Vec2::new(1.0, -1.0).reflect(Vec2::new(0.0, 1.0)),
            Vec2::new(1.0, 1.0)
        );
    }

    #[test]
    fn test_from_vec2() {
        let v = Vec3::from_vec2(Vec2::new(0.25, -0.5), 1.0);
        assert_eq!(v, Vec3::new(0.25, -0.5, 1.0));
    }
}
