/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Interpolating cubic spline
//!
//! The spline passes through every data point and uses not-a-knot end
//! conditions: the third derivative is continuous across the second and the
//! second-to-last knots. This is the spline an interpolating (s = 0) cubic
//! FITPACK spline produces, so values, derivatives, integrals and roots agree
//! with those obtained from that family of tools.
//!
//! Each interval stores the coefficients of its cubic in the local coordinate
//! `d = x - x_i`, which keeps evaluation, integration and root finding local.

use super::errors::{RadialError, Result};

/// Minimum number of points for a not-a-knot cubic spline
pub const MIN_SPLINE_POINTS: usize = 4;

/// Maximum number of bisection steps when refining a root
const MAX_BISECTION_STEPS: usize = 200;

/// Cubic spline through a set of points with strictly increasing abscissae
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Polynomial coefficients [c0, c1, c2, c3] of each interval
    coeffs: Vec<[f64; 4]>,
}

impl CubicSpline {
    /// Build the spline through `(x[i], y[i])`
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(RadialError::LengthMismatch {
                mesh: x.len(),
                values: y.len(),
            });
        }

        let n = x.len();
        if n < MIN_SPLINE_POINTS {
            return Err(RadialError::MeshTooSmall {
                required: MIN_SPLINE_POINTS,
                actual: n,
            });
        }

        // The negated comparison also rejects NaN
        if let Some(i) = (1..n).find(|&i| !(x[i] > x[i - 1])) {
            return Err(RadialError::NonMonotonicMesh(i));
        }

        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let slopes: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();
        let m = second_derivatives(&h, &slopes);

        let coeffs = (0..n - 1)
            .map(|i| {
                [
                    y[i],
                    slopes[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0,
                    0.5 * m[i],
                    (m[i + 1] - m[i]) / (6.0 * h[i]),
                ]
            })
            .collect();

        log::debug!("Built cubic spline on {} points", n);

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            coeffs,
        })
    }

    /// Interval used to evaluate `x`; points outside the knots use the end intervals
    fn interval(&self, x: f64) -> usize {
        let last = self.coeffs.len() - 1;
        self.x
            .partition_point(|&xi| xi <= x)
            .saturating_sub(1)
            .min(last)
    }

    /// Value of the spline at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        let i = self.interval(x);
        let [c0, c1, c2, c3] = self.coeffs[i];
        let d = x - self.x[i];
        c0 + d * (c1 + d * (c2 + d * c3))
    }

    /// Value and first three derivatives of the spline at `x`
    pub fn derivatives(&self, x: f64) -> [f64; 4] {
        let i = self.interval(x);
        let [c0, c1, c2, c3] = self.coeffs[i];
        let d = x - self.x[i];
        [
            c0 + d * (c1 + d * (c2 + d * c3)),
            c1 + d * (2.0 * c2 + 3.0 * d * c3),
            2.0 * c2 + 6.0 * c3 * d,
            6.0 * c3,
        ]
    }

    /// Definite integral between `a` and `b`
    ///
    /// The spline is taken to vanish outside its knots. A NaN bound gives NaN.
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        if a.is_nan() || b.is_nan() {
            return f64::NAN;
        }
        if a > b {
            return -self.integral(b, a);
        }

        let first = self.x[0];
        let last = self.x[self.x.len() - 1];
        let a = a.clamp(first, last);
        let b = b.clamp(first, last);

        let mut total = 0.0;
        for (i, coeffs) in self.coeffs.iter().enumerate() {
            let lo = a.max(self.x[i]);
            let hi = b.min(self.x[i + 1]);
            if hi <= lo {
                continue;
            }
            total += antiderivative(coeffs, hi - self.x[i]) - antiderivative(coeffs, lo - self.x[i]);
        }
        total
    }

    /// Real zeros of the spline between the first and the last knot, ascending
    pub fn roots(&self) -> Vec<f64> {
        let mut roots = Vec::new();

        for (i, coeffs) in self.coeffs.iter().enumerate() {
            let h = self.x[i + 1] - self.x[i];
            let poly = |d: f64| coeffs[0] + d * (coeffs[1] + d * (coeffs[2] + d * coeffs[3]));

            let mut breaks = vec![0.0];
            breaks.extend(critical_points(coeffs).into_iter().filter(|&d| d > 0.0 && d < h));
            breaks.push(h);

            for w in breaks.windows(2) {
                let (p, q) = (w[0], w[1]);
                let fp = if p == 0.0 { self.y[i] } else { poly(p) };
                let fq = if q == h { self.y[i + 1] } else { poly(q) };

                if fp == 0.0 {
                    roots.push(self.x[i] + p);
                } else if fp * fq < 0.0 {
                    roots.push(self.x[i] + bisect(&poly, p, q, fp));
                }
            }
        }

        if self.y[self.y.len() - 1] == 0.0 {
            roots.push(self.x[self.x.len() - 1]);
        }

        roots.dedup_by(|a, b| (*a - *b).abs() <= 1.0e-12 * b.abs().max(1.0));
        roots
    }
}

/// Second derivatives at the knots with not-a-knot end conditions
///
/// The end values are eliminated through the not-a-knot relations so the
/// remaining system for the interior knots stays tridiagonal.
fn second_derivatives(h: &[f64], slopes: &[f64]) -> Vec<f64> {
    let n = h.len() + 1;
    let k = n - 2;

    let mut sub = vec![0.0; k];
    let mut diag = vec![0.0; k];
    let mut sup = vec![0.0; k];
    let mut rhs = vec![0.0; k];

    for row in 0..k {
        let i = row + 1;
        sub[row] = h[i - 1];
        diag[row] = 2.0 * (h[i - 1] + h[i]);
        sup[row] = h[i];
        rhs[row] = 6.0 * (slopes[i] - slopes[i - 1]);
    }

    // M0 = ((h0 + h1) M1 - h0 M2) / h1
    let (h0, h1) = (h[0], h[1]);
    diag[0] += h0 * (h0 + h1) / h1;
    sup[0] -= h0 * h0 / h1;

    // M[n-1] = ((ha + hb) M[n-2] - hb M[n-3]) / ha
    let (ha, hb) = (h[n - 3], h[n - 2]);
    diag[k - 1] += hb * (ha + hb) / ha;
    sub[k - 1] -= hb * hb / ha;

    // Thomas algorithm
    for i in 1..k {
        let w = sub[i] / diag[i - 1];
        diag[i] -= w * sup[i - 1];
        rhs[i] -= w * rhs[i - 1];
    }
    let mut interior = vec![0.0; k];
    interior[k - 1] = rhs[k - 1] / diag[k - 1];
    for i in (0..k - 1).rev() {
        interior[i] = (rhs[i] - sup[i] * interior[i + 1]) / diag[i];
    }

    let mut m = Vec::with_capacity(n);
    m.push(((h0 + h1) * interior[0] - h0 * interior[1]) / h1);
    m.extend_from_slice(&interior);
    m.push(((ha + hb) * interior[k - 1] - hb * interior[k - 2]) / ha);
    m
}

fn antiderivative(c: &[f64; 4], d: f64) -> f64 {
    d * (c[0] + d * (c[1] / 2.0 + d * (c[2] / 3.0 + d * c[3] / 4.0)))
}

/// Zeros of the derivative 3 c3 d² + 2 c2 d + c1, ascending
fn critical_points(c: &[f64; 4]) -> Vec<f64> {
    let (a, b, c1) = (3.0 * c[3], 2.0 * c[2], c[1]);

    if a == 0.0 {
        if b == 0.0 {
            return Vec::new();
        }
        return vec![-c1 / b];
    }

    let disc = b * b - 4.0 * a * c1;
    if disc < 0.0 {
        return Vec::new();
    }

    // Numerically stable quadratic roots
    let q = -0.5 * (b + b.signum() * disc.sqrt());
    let mut points = if q == 0.0 {
        vec![0.0]
    } else {
        vec![q / a, c1 / q]
    };
    points.sort_by(|x, y| x.total_cmp(y));
    points
}

fn bisect<F: Fn(f64) -> f64>(f: &F, mut lo: f64, mut hi: f64, mut flo: f64) -> f64 {
    for _ in 0..MAX_BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        let fmid = f(mid);
        if fmid == 0.0 {
            return mid;
        }
        if (fmid < 0.0) == (flo < 0.0) {
            lo = mid;
            flo = fmid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn cubic(x: f64) -> f64 {
        x * x * x - 2.0 * x * x + 0.5 * x - 1.0
    }

    fn nonuniform_mesh(n: usize, rmax: f64) -> Vec<f64> {
        (0..n)
            .map(|i| rmax * ((i as f64) / (n as f64 - 1.0)).powi(2))
            .collect()
    }

    #[test]
    fn test_reproduces_cubic_polynomial() {
        let x = nonuniform_mesh(12, 3.0);
        let y: Vec<f64> = x.iter().map(|&x| cubic(x)).collect();
        let spline = CubicSpline::new(&x, &y).unwrap();

        for &t in &[0.05, 0.7, 1.33, 2.9] {
            assert_relative_eq!(spline.evaluate(t), cubic(t), epsilon = 1e-9);
            let d = spline.derivatives(t);
            assert_relative_eq!(d[1], 3.0 * t * t - 4.0 * t + 0.5, epsilon = 1e-8);
            assert_relative_eq!(d[2], 6.0 * t - 4.0, epsilon = 1e-7);
            assert_relative_eq!(d[3], 6.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_four_points_is_exact_for_cubic() {
        let x = [0.0, 1.0, 2.5, 3.0];
        let y: Vec<f64> = x.iter().map(|&x| cubic(x)).collect();
        let spline = CubicSpline::new(&x, &y).unwrap();
        assert_relative_eq!(spline.evaluate(1.7), cubic(1.7), epsilon = 1e-10);
    }

    #[test]
    fn test_integral_of_cubic() {
        let x = nonuniform_mesh(10, 2.0);
        let y: Vec<f64> = x.iter().map(|&x| cubic(x)).collect();
        let spline = CubicSpline::new(&x, &y).unwrap();

        let primitive = |t: f64| t.powi(4) / 4.0 - 2.0 * t.powi(3) / 3.0 + 0.25 * t * t - t;
        assert_relative_eq!(
            spline.integral(0.3, 1.8),
            primitive(1.8) - primitive(0.3),
            epsilon = 1e-10
        );
        assert_relative_eq!(
            spline.integral(1.8, 0.3),
            primitive(0.3) - primitive(1.8),
            epsilon = 1e-10
        );
        // Zero outside the knots
        assert_relative_eq!(
            spline.integral(-5.0, 10.0),
            primitive(2.0) - primitive(0.0),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_integral_with_nan_bound() {
        let x = nonuniform_mesh(10, 2.0);
        let y: Vec<f64> = x.iter().map(|&x| cubic(x)).collect();
        let spline = CubicSpline::new(&x, &y).unwrap();

        assert!(spline.integral(f64::NAN, 1.0).is_nan());
        assert!(spline.integral(0.5, f64::NAN).is_nan());
    }

    #[test]
    fn test_roots_of_sine() {
        let x: Vec<f64> = (0..400).map(|i| 0.05 + i as f64 * 0.025).collect();
        let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();
        let spline = CubicSpline::new(&x, &y).unwrap();

        let roots = spline.roots();
        assert_eq!(roots.len(), 3);
        for (k, root) in roots.iter().enumerate() {
            assert_relative_eq!(*root, (k + 1) as f64 * PI, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_roots_on_knots_are_reported_once() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 1.0, 0.0, -1.0, 0.0];
        let spline = CubicSpline::new(&x, &y).unwrap();
        let roots = spline.roots();
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 0.0);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(roots[2], 4.0);
    }

    #[test]
    fn test_invalid_meshes() {
        assert!(matches!(
            CubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]),
            Err(RadialError::MeshTooSmall { .. })
        ));
        assert!(matches!(
            CubicSpline::new(&[0.0, 1.0, 1.0, 2.0], &[0.0; 4]),
            Err(RadialError::NonMonotonicMesh(2))
        ));
        assert!(matches!(
            CubicSpline::new(&[0.0, 1.0, 2.0, 3.0], &[0.0; 3]),
            Err(RadialError::LengthMismatch { .. })
        ));
    }
}
