mod sphere;

pub use sphere::Sphere;

use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(&self, time: Float) -> Vec3 {
        self.origin + self.direction * time
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum QuadraticSolution {
    NoRealRoots,
    /// `root1 <= root2`
    Roots { root1: Float, root2: Float },
}

/// Real roots of `a t^2 + b t + c = 0`. The caller must ensure `a != 0`.
///
/// Uses the `q = -0.5 (b + sign(b) sqrt(discr))` form so that `b` and the square
/// root never cancel each other out.
pub fn solve_quadratic(a: Float, b: Float, c: Float) -> QuadraticSolution {
    let discriminant = b * b - 4.0 * a * c;
    let (mut root1, mut root2);
    if discriminant < 0.0 {
        return QuadraticSolution::NoRealRoots;
    } else if discriminant == 0.0 {
        root1 = -0.5 * b / a;
        root2 = root1;
    } else {
        let discriminant_sqrt = discriminant.sqrt();
        let q = if b > 0.0 {
            -0.5 * (b + discriminant_sqrt)
        } else {
            -0.5 * (b - discriminant_sqrt)
        };
        root1 = q / a;
        root2 = c / q;
    }
    if root1 > root2 {
        std::mem::swap(&mut root1, &mut root2);
    }
    QuadraticSolution::Roots { root1, root2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_roots() {
        assert_eq!(
            solve_quadratic(1.0, 0.0, -4.0),
            QuadraticSolution::Roots {
                root1: -2.0,
                root2: 2.0
            }
        );
    }

    #[test]
    fn test_double_root() {
        assert_eq!(
            solve_quadratic(1.0, 2.0, 1.0),
            QuadraticSolution::Roots {
                root1: -1.0,
                root2: -1.0
            }
        );
    }

    #[test]
    fn test_no_real_roots() {
        assert_eq!(
            solve_quadratic(1.0, 0.0, 4.0),
            QuadraticSolution::NoRealRoots
        );
    }

    #[test]
    fn test_roots_are_ordered() {
        // (t - 3)(t + 5) with both signs of b
        for (a, b, c) in [(1.0, 2.0, -15.0), (-1.0, -2.0, 15.0), (2.0, -16.0, 30.0)] {
            match solve_quadratic(a, b, c) {
                QuadraticSolution::Roots { root1, root2 } => {
                    assert!(root1 <= root2);
                    assert!((a * root1 * root1 + b * root1 + c).abs() < 1e-9);
                    assert!((a * root2 * root2 + b * root2 + c).abs() < 1e-9);
                }
                QuadraticSolution::NoRealRoots => panic!("expected roots for {} {} {}", a, b, c),
            }
        }
    }

    #[test]
    fn test_no_cancellation_for_large_b() {
        // roots are roughly -1e8 and -1e-8
        match solve_quadratic(1.0, 1e8, 1.0) {
            QuadraticSolution::Roots { root1, root2 } => {
                assert!((root1 + 1e8).abs() < 1.0);
                assert!((root2 + 1e-8).abs() < 1e-15);
            }
            QuadraticSolution::NoRealRoots => panic!(),
        }
    }

    #[test]
    fn test_point_at_parameter() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.point_at_parameter(1.5), Vec3::new(0.0, 1.0, 3.0));
    }
}
