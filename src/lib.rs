//! Escape-time fractal generation.
//!
//! A [`ViewState`] and a [`Resolution`] define the sampled axes of the complex
//! plane; every sample is iterated under a Multibrot or Julia recurrence and the
//! escape counts are collected into an [`IterationGrid`]. [`ViewController`] owns
//! the view during an interactive session.

pub mod cancellation;
pub mod colour;
pub mod controller;
pub mod engine;
pub mod error;
pub mod generate;
pub mod grid;
pub mod kernel;
pub mod resolution;
pub mod viewport;

pub use cancellation::{CancelFlag, CancellationChecker, NeverCancel};
pub use colour::{ColourRange, HistogramColouring, Legend, Palette};
pub use controller::{PointerButton, ViewController};
pub use engine::{Engine, EngineConfig};
pub use error::{Error, Result};
pub use generate::{
    generate, generate_cancellable, generate_julia, generate_mandelbrot, FractalParameters,
    Generation, DEFAULT_MAX_ITERATIONS,
};
pub use grid::IterationGrid;
pub use kernel::{ComplexPoint, FractalKind, DEFAULT_JULIA_CONSTANT, DEFAULT_POWER, ESCAPE_BOUND};
pub use resolution::Resolution;
pub use viewport::{Axis, ViewState, Viewport};
