/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Named functions sampled on a radial mesh

use super::config::RadialFileConfig;
use super::errors::{RadialError, Result};
use super::spline::CubicSpline;
use ndarray::{s, Array1, ArrayView1};
use once_cell::unsync::OnceCell;
use std::fmt;
use std::ops::Range;
use std::path::Path;

/// Default tolerance of [`RadialFunction::ir_small`]
pub const DEFAULT_SMALL_TOL: f64 = 0.01;

/// A function with a name, a radial mesh and values defined on this mesh
///
/// The cubic splines used for interpolation and integration are built on
/// first use and cached.
#[derive(Debug, Clone)]
pub struct RadialFunction {
    name: String,
    rmesh: Array1<f64>,
    values: Array1<f64>,
    spline: OnceCell<CubicSpline>,
    density_spline: OnceCell<CubicSpline>,
}

impl RadialFunction {
    /// Create a radial function; mesh and values must have the same non-zero length
    pub fn new(
        name: impl Into<String>,
        rmesh: impl Into<Array1<f64>>,
        values: impl Into<Array1<f64>>,
    ) -> Result<Self> {
        let rmesh = rmesh.into();
        let values = values.into();

        if rmesh.len() != values.len() {
            return Err(RadialError::LengthMismatch {
                mesh: rmesh.len(),
                values: values.len(),
            });
        }
        if rmesh.is_empty() {
            return Err(RadialError::EmptyMesh);
        }

        Ok(Self {
            name: name.into(),
            rmesh,
            values,
            spline: OnceCell::new(),
            density_spline: OnceCell::new(),
        })
    }

    /// Read a radial function from a whitespace-delimited text file
    pub fn from_file<P: AsRef<Path>>(path: P, config: &RadialFileConfig) -> Result<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();

        let text = std::fs::read_to_string(path).map_err(|source| RadialError::FileRead {
            path: label.clone(),
            source,
        })?;
        let (rmesh, values) = parse_columns(&text, &label, config)?;
        log::debug!("Read {} radial points from {}", rmesh.len(), label);

        let name = config.name.clone().unwrap_or(label);
        Self::new(name, rmesh, values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rmesh(&self) -> &Array1<f64> {
        &self.rmesh
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (rpoint, value)
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rmesh.iter().copied().zip(self.values.iter().copied())
    }

    /// Mesh points and values in the index range
    pub fn slice(&self, range: Range<usize>) -> (ArrayView1<'_, f64>, ArrayView1<'_, f64>) {
        (
            self.rmesh.slice(s![range.start..range.end]),
            self.values.slice(s![range.start..range.end]),
        )
    }

    /// Outermost point of the radial mesh
    pub fn rmax(&self) -> f64 {
        self.rmesh[self.rmesh.len() - 1]
    }

    /// Size of the radial mesh
    pub fn rsize(&self) -> usize {
        self.rmesh.len()
    }

    /// Indices of the (first) minimum and maximum value
    pub fn minmax_ridx(&self) -> (usize, usize) {
        let mut imin = 0;
        let mut imax = 0;
        for (i, &v) in self.values.iter().enumerate() {
            if v < self.values[imin] {
                imin = i;
            }
            if v > self.values[imax] {
                imax = i;
            }
        }
        (imin, imax)
    }

    /// Indices i such that the function changes sign (or vanishes) between i and i + 1
    pub fn inodes(&self) -> Vec<usize> {
        self.values
            .windows(2)
            .into_iter()
            .enumerate()
            .filter(|(_, w)| w[0] * w[1] <= 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Cubic spline through the values
    pub fn spline(&self) -> Result<&CubicSpline> {
        self.spline
            .get_or_try_init(|| CubicSpline::new(&self.rmesh.to_vec(), &self.values.to_vec()))
    }

    /// Zeros of the spline
    pub fn roots(&self) -> Result<Vec<f64>> {
        Ok(self.spline()?.roots())
    }

    /// Value and first three derivatives of the spline at `r`
    pub fn derivatives(&self, r: f64) -> Result<[f64; 4]> {
        Ok(self.spline()?.derivatives(r))
    }

    /// Integral of (r * value)² between `a` and `b`
    ///
    /// The bounds default to the first and the last mesh point; a NaN bound
    /// is rejected.
    pub fn integral(&self, a: Option<f64>, b: Option<f64>) -> Result<f64> {
        let a = a.unwrap_or(self.rmesh[0]);
        let b = b.unwrap_or_else(|| self.rmax());
        if let Some(bad) = [a, b].into_iter().find(|r| r.is_nan()) {
            return Err(RadialError::PointOutOfMesh(bad));
        }

        let spline = self.density_spline.get_or_try_init(|| {
            let density: Vec<f64> = self.iter().map(|(r, v)| (r * v).powi(2)).collect();
            CubicSpline::new(&self.rmesh.to_vec(), &density)
        })?;
        Ok(spline.integral(a, b))
    }

    /// Index of the last mesh point not larger than `rpoint`
    pub fn ifromr(&self, rpoint: f64) -> Result<usize> {
        if !(rpoint >= self.rmesh[0] && rpoint <= self.rmax()) {
            return Err(RadialError::PointOutOfMesh(rpoint));
        }
        let count = self.rmesh.iter().take_while(|&&r| r <= rpoint).count();
        Ok(count - 1)
    }

    /// Rightmost index where the magnitude of the function exceeds `abs_tol`
    ///
    /// Assumes the values tend to zero for large r. Returns 0 when no value
    /// exceeds the tolerance.
    pub fn ir_small(&self, abs_tol: f64) -> usize {
        self.values
            .iter()
            .rposition(|v| v.abs() > abs_tol)
            .unwrap_or(0)
    }
}

impl fmt::Display for RadialFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<RadialFunction, name = {}>", self.name)
    }
}

/// Extract the mesh and value columns of a text table
fn parse_columns(text: &str, label: &str, config: &RadialFileConfig) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rmesh = Vec::new();
    let mut values = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(config.comment) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let column = |idx: usize| -> Result<f64> {
            let field = fields.get(idx).ok_or_else(|| RadialError::Parse {
                path: label.to_string(),
                line: lineno + 1,
                reason: format!("missing column {} (found {})", idx, fields.len()),
            })?;
            field.parse::<f64>().map_err(|e| RadialError::Parse {
                path: label.to_string(),
                line: lineno + 1,
                reason: format!("'{}': {}", field, e),
            })
        };

        rmesh.push(column(config.mesh_column)?);
        values.push(column(config.value_column)?);
    }

    Ok((rmesh, values))
}
