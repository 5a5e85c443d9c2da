// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape evaluator.  Takes a point, iterates it, and counts how
//! long the orbit stays inside the circle of radius two.
//!
//! Note that the recurrence here is *not* the textbook `z * z + c`.
//! The real part of each step is `x * x * y + x0`, not `x * x - y * y
//! + x0`, and that is what gives this plane its particular shape.
//! Swapping in `Complex` multiplication would draw a different
//! picture.

use num::Complex;

/// The squared escape radius.
pub const ESCAPE_NORM_SQR: f64 = 4.0;

/// One step of the recurrence, starting from `z` with seed `c`.
#[inline]
pub fn step(z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
    Complex::new(z.re * z.re * z.im + c.re, 2.0 * z.re * z.im + c.im)
}

/// Returns the number of iterations the orbit of `point` stayed inside
/// the escape radius, up to `max_iterations`.  The orbit starts at the
/// point itself, so anything already outside the radius scores zero.
/// An orbit that never escapes scores `max_iterations`.
pub fn iteration_count(point: Complex<f64>, max_iterations: usize) -> usize {
    if point.norm_sqr() > ESCAPE_NORM_SQR {
        return 0;
    }
    let mut z = point;
    let mut count = 0;
    while count < max_iterations {
        z = step(z, point);
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            break;
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::MAX_ITER;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(iteration_count(Complex::new(0.0, 0.0), MAX_ITER), MAX_ITER);
    }

    #[test]
    fn point_outside_radius_scores_zero() {
        assert_eq!(iteration_count(Complex::new(3.0, 0.0), MAX_ITER), 0);
        assert_eq!(iteration_count(Complex::new(-1.5, 1.5), MAX_ITER), 0);
        assert_eq!(iteration_count(Complex::new(0.0, -2.1), MAX_ITER), 0);
    }

    #[test]
    fn step_is_the_literal_recurrence() {
        let z = step(Complex::new(2.0, 3.0), Complex::new(0.5, -0.5));
        // 2 * 2 * 3 + 0.5, 2 * 2 * 3 - 0.5
        assert_eq!(z, Complex::new(12.5, 11.5));
    }

    #[test]
    fn real_axis_points_are_fixed() {
        // With y = 0 both parts of the step collapse back to the seed.
        assert_eq!(iteration_count(Complex::new(1.9, 0.0), MAX_ITER), MAX_ITER);
        assert_eq!(iteration_count(Complex::new(-1.9, 0.0), MAX_ITER), MAX_ITER);
    }

    #[test]
    fn escape_counts_iterates_that_stayed_inside() {
        // (0.625, 1.0) and (0.890625, 1.75) stay inside, the third leaves.
        assert_eq!(iteration_count(Complex::new(0.5, 0.5), MAX_ITER), 2);
        // Inside the radius, but the very first step leaves it.
        assert_eq!(iteration_count(Complex::new(1.0, 1.0), MAX_ITER), 0);
    }

    #[test]
    fn corner_of_default_view_escapes_at_once() {
        assert_eq!(iteration_count(Complex::new(-2.0, 2.0), MAX_ITER), 0);
    }

    #[test]
    fn count_respects_a_smaller_cap() {
        assert_eq!(iteration_count(Complex::new(0.0, 0.0), 10), 10);
        assert_eq!(iteration_count(Complex::new(0.5, 0.0), 2), 2);
    }

    #[test]
    fn count_never_exceeds_cap() {
        use rand::distributions::{Distribution, Uniform};
        use rand::thread_rng;

        let mut rng = thread_rng();
        let coord = Uniform::new_inclusive(-3.0_f64, 3.0_f64);
        for _ in 0..5_000 {
            let point = Complex::new(coord.sample(&mut rng), coord.sample(&mut rng));
            assert!(iteration_count(point, MAX_ITER) <= MAX_ITER);
        }
    }
}
