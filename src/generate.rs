//! Generation entry points: parameters in, axes and grid out.

use std::time::Instant;

use log::debug;

use crate::{
    cancellation::{CancellationChecker, NeverCancel},
    error::{Error, Result},
    grid::{self, IterationGrid},
    kernel::{ComplexPoint, FractalKind, Recurrence, ESCAPE_BOUND},
    resolution::Resolution,
    viewport::{Axis, ViewState, Viewport},
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Everything one generation pass needs. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParameters {
    pub kind: FractalKind,
    pub max_iterations: u32,
    pub view: ViewState,
    pub resolution: Resolution,
}

impl FractalParameters {
    pub fn builder(kind: FractalKind) -> Builder {
        Builder::new(kind)
    }

    pub fn escape_bound(&self) -> f64 {
        ESCAPE_BOUND
    }

    /// Check every input before any iteration work starts.
    pub fn validate(&self) -> Result<Viewport> {
        let viewport = Viewport::new(self.view, self.resolution)?;
        if self.max_iterations == 0 {
            return Err(Error::InvalidIterationBudget(self.max_iterations));
        }
        Ok(viewport)
    }
}

pub struct Builder {
    kind: FractalKind,
    max_iterations: u32,
    view: ViewState,
    resolution: Resolution,
}

impl Builder {
    pub fn new(kind: FractalKind) -> Self {
        Self {
            kind,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            view: ViewState::DEFAULT,
            resolution: Resolution::DEFAULT,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = Resolution::new(width, height);
        self
    }

    pub fn with_view(mut self, view: ViewState) -> Self {
        self.view = view;
        self
    }

    pub fn with_center(mut self, center_x: f64, center_y: f64) -> Self {
        self.view.center_x = center_x;
        self.view.center_y = center_y;
        self
    }

    pub fn with_zoom(mut self, zoom_factor: f64) -> Self {
        self.view.zoom_factor = zoom_factor;
        self
    }

    pub fn build(self) -> FractalParameters {
        FractalParameters {
            kind: self.kind,
            max_iterations: self.max_iterations,
            view: self.view,
            resolution: self.resolution,
        }
    }
}

/// Result of one pass: the sampled axes and the grid aligned with them.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    parameters: FractalParameters,
    axis_x: Axis,
    axis_y: Axis,
    grid: IterationGrid,
}

impl Generation {
    pub fn parameters(&self) -> &FractalParameters {
        &self.parameters
    }

    pub fn axis_x(&self) -> &Axis {
        &self.axis_x
    }

    pub fn axis_y(&self) -> &Axis {
        &self.axis_y
    }

    pub fn grid(&self) -> &IterationGrid {
        &self.grid
    }

    pub fn into_parts(self) -> (Axis, Axis, IterationGrid) {
        (self.axis_x, self.axis_y, self.grid)
    }

    /// Plot title in the form the interactive tool shows above the image.
    pub fn title(&self) -> String {
        let FractalParameters {
            kind,
            max_iterations,
            view,
            ..
        } = self.parameters;
        match kind {
            FractalKind::Mandelbrot { power } => format!(
                "Multibrot set for z_new = z^{} + c with {} iterations, zoom {}",
                power, max_iterations, view.zoom_factor
            ),
            FractalKind::Julia { constant } => format!(
                "Julia Set\nCenter = {}{:+}i, Zoom = {}, Max Iterations = {}",
                constant.re, constant.im, view.zoom_factor, max_iterations
            ),
        }
    }
}

/// Run one pass on the current rayon pool.
pub fn generate(parameters: &FractalParameters) -> Result<Generation> {
    generate_cancellable(parameters, &NeverCancel)
}

/// Like [`generate`], abandoning the pass with [`Error::Cancelled`] once
/// `checker` reports cancellation.
pub fn generate_cancellable(
    parameters: &FractalParameters,
    checker: &impl CancellationChecker,
) -> Result<Generation> {
    let viewport = parameters.validate()?;

    debug!(
        "generating {} {}x{} max_iterations={} view={:?}",
        parameters.kind.name(),
        parameters.resolution.width,
        parameters.resolution.height,
        parameters.max_iterations,
        parameters.view
    );
    let start = Instant::now();

    let (axis_x, axis_y) = viewport.axes();
    let grid = grid::assemble(
        &axis_x,
        &axis_y,
        Recurrence::new(parameters.kind),
        parameters.max_iterations,
        checker,
    )?;

    debug!(
        "generated {} in {:?}: {} escaped, {} bounded",
        parameters.kind.name(),
        start.elapsed(),
        grid.escaped_count(),
        grid.bounded_count()
    );

    Ok(Generation {
        parameters: *parameters,
        axis_x,
        axis_y,
        grid,
    })
}

/// Multibrot set `z -> z^power + c` over the given view.
pub fn generate_mandelbrot(
    max_iterations: u32,
    width: u32,
    height: u32,
    power: f64,
    zoom_factor: f64,
    center_x: f64,
    center_y: f64,
) -> Result<Generation> {
    let parameters = FractalParameters::builder(FractalKind::Mandelbrot { power })
        .with_max_iterations(max_iterations)
        .with_resolution(width, height)
        .with_view(ViewState::new(center_x, center_y, zoom_factor))
        .build();
    generate(&parameters)
}

/// Julia set `z -> z^2 + constant` over the given view.
pub fn generate_julia(
    constant: ComplexPoint,
    max_iterations: u32,
    width: u32,
    height: u32,
    zoom_factor: f64,
    center_x: f64,
    center_y: f64,
) -> Result<Generation> {
    let parameters = FractalParameters::builder(FractalKind::Julia { constant })
        .with_max_iterations(max_iterations)
        .with_resolution(width, height)
        .with_view(ViewState::new(center_x, center_y, zoom_factor))
        .build();
    generate(&parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let parameters = FractalParameters::builder(FractalKind::mandelbrot()).build();
        assert_eq!(parameters.max_iterations, 100);
        assert_eq!(parameters.resolution, Resolution::new(500, 500));
        assert_eq!(parameters.view, ViewState::new(0.0, 0.0, 1.0));
        assert_eq!(parameters.escape_bound(), 2.0);
    }

    #[test]
    fn builder_overrides() {
        let parameters = FractalParameters::builder(FractalKind::julia())
            .with_max_iterations(7)
            .with_resolution(4, 3)
            .with_center(0.5, -0.5)
            .with_zoom(0.25)
            .build();
        assert_eq!(parameters.max_iterations, 7);
        assert_eq!(parameters.resolution, Resolution::new(4, 3));
        assert_eq!(parameters.view, ViewState::new(0.5, -0.5, 0.25));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let parameters = FractalParameters::builder(FractalKind::mandelbrot())
            .with_max_iterations(0)
            .build();
        assert!(matches!(
            parameters.validate(),
            Err(Error::InvalidIterationBudget(0))
        ));
    }

    #[test]
    fn mandelbrot_title() {
        let generation = generate_mandelbrot(100, 2, 2, 2.0, 0.5, 0.0, 0.0).unwrap();
        assert_eq!(
            generation.title(),
            "Multibrot set for z_new = z^2 + c with 100 iterations, zoom 0.5"
        );
    }

    #[test]
    fn julia_title() {
        let generation =
            generate_julia(ComplexPoint::new(-0.05, -0.66), 50, 2, 2, 1.0, 0.0, 0.0).unwrap();
        assert_eq!(
            generation.title(),
            "Julia Set\nCenter = -0.05-0.66i, Zoom = 1, Max Iterations = 50"
        );
    }

    #[test]
    fn parts_keep_their_shapes() {
        let (axis_x, axis_y, grid) = generate_mandelbrot(20, 6, 4, 2.0, 1.0, 0.0, 0.0)
            .unwrap()
            .into_parts();
        assert_eq!(axis_x.len(), 6);
        assert_eq!(axis_y.len(), 4);
        assert_eq!((grid.width(), grid.height()), (6, 4));
    }
}
