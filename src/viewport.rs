//! Mapping from a view of the complex plane to sampled coordinate axes.

use log::trace;

use crate::{
    error::{Error, Result},
    kernel::ComplexPoint,
    resolution::Resolution,
};

/// Half-width of the real axis at `zoom_factor == 1`.
pub const BASE_RANGE_X: f64 = 1.75;

/// Half-height of the imaginary axis at `zoom_factor == 1`.
pub const BASE_RANGE_Y: f64 = 2.0;

/// Centre and zoom of the visible region. Smaller `zoom_factor` means deeper zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom_factor: f64,
}

impl ViewState {
    pub const DEFAULT: Self = ViewState {
        center_x: 0.0,
        center_y: 0.0,
        zoom_factor: 1.0,
    };

    pub fn new(center_x: f64, center_y: f64, zoom_factor: f64) -> Self {
        Self {
            center_x,
            center_y,
            zoom_factor,
        }
    }

    pub fn validate(self) -> Result<Self> {
        if !(self.zoom_factor > 0.0 && self.zoom_factor.is_finite()) {
            return Err(Error::InvalidZoom(self.zoom_factor));
        }
        Ok(self)
    }

    pub fn range_x(&self) -> f64 {
        BASE_RANGE_X * self.zoom_factor
    }

    pub fn range_y(&self) -> f64 {
        BASE_RANGE_Y * self.zoom_factor
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Evenly spaced, increasing samples over `[min, max]`, both ends included.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    values: Vec<f64>,
    step: f64,
}

impl Axis {
    /// Samples `count` points. A single sample sits at `min`.
    pub fn linspace(min: f64, max: f64, count: usize) -> Self {
        match count {
            0 => Self {
                values: Vec::new(),
                step: 0.0,
            },
            1 => Self {
                values: vec![min],
                step: 0.0,
            },
            _ => {
                let step = (max - min) / (count - 1) as f64;
                let mut values: Vec<f64> = (0..count).map(|i| min + i as f64 * step).collect();
                // Pin the last sample so rounding never shortens the span.
                values[count - 1] = max;
                Self { values, step }
            }
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.values.first().copied().unwrap_or(f64::NAN)
    }

    pub fn max(&self) -> f64 {
        self.values.last().copied().unwrap_or(f64::NAN)
    }

    pub fn span(&self) -> f64 {
        self.max() - self.min()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Plane coordinate at a possibly fractional sample index.
    pub fn interpolate(&self, index: f64) -> f64 {
        self.min() + index * self.step
    }
}

impl std::ops::Index<usize> for Axis {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// A validated view paired with the resolution it is sampled at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    view: ViewState,
    resolution: Resolution,
}

impl Viewport {
    pub fn new(view: ViewState, resolution: Resolution) -> Result<Self> {
        Ok(Self {
            view: view.validate()?,
            resolution: resolution.validate()?,
        })
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn axis_x(&self) -> Axis {
        let range = self.view.range_x();
        Axis::linspace(
            self.view.center_x - range,
            self.view.center_x + range,
            self.resolution.width as usize,
        )
    }

    pub fn axis_y(&self) -> Axis {
        let range = self.view.range_y();
        Axis::linspace(
            self.view.center_y - range,
            self.view.center_y + range,
            self.resolution.height as usize,
        )
    }

    pub fn axes(&self) -> (Axis, Axis) {
        trace!(
            "building axes for {:?} at {}x{}",
            self.view,
            self.resolution.width,
            self.resolution.height
        );
        (self.axis_x(), self.axis_y())
    }

    /// Plane point under a (possibly fractional) grid position.
    ///
    /// Column follows the real axis and row follows the imaginary axis, the same
    /// way the generated grid is laid out.
    pub fn plane_point(&self, col: f64, row: f64) -> ComplexPoint {
        ComplexPoint::new(self.axis_x().interpolate(col), self.axis_y().interpolate(row))
    }
}
