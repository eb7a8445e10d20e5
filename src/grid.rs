//! Row-major grid of escape counts and the parallel pass that fills it.

use log::trace;
use rayon::prelude::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

use crate::{
    cancellation::CancellationChecker,
    error::{Error, Result},
    kernel::{ComplexPoint, Recurrence},
    resolution::Resolution,
    viewport::Axis,
};

/// `height` rows of `width` escape counts. Row `r`, column `c` holds the count for
/// the plane point `(axis_x[c], axis_y[r])`; 0 marks a bounded orbit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterationGrid {
    resolution: Resolution,
    cells: Vec<u32>,
}

impl IterationGrid {
    pub fn width(&self) -> usize {
        self.resolution.width as usize
    }

    pub fn height(&self) -> usize {
        self.resolution.height as usize
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.width() + col]
    }

    pub fn row(&self, row: usize) -> &[u32] {
        let width = self.width();
        &self.cells[row * width..(row + 1) * width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width())
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Native-endian bytes of the cells, for handing to a renderer without a copy.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    pub fn escaped_count(&self) -> usize {
        self.cells.iter().filter(|&&count| count != 0).count()
    }

    pub fn bounded_count(&self) -> usize {
        self.cells.len() - self.escaped_count()
    }
}

/// Evaluate `recurrence` at every `(x, y)` pair of the axes.
///
/// Rows are computed in parallel on the current rayon pool; each worker owns a
/// disjoint row slice, so the result does not depend on scheduling.
pub fn assemble(
    axis_x: &Axis,
    axis_y: &Axis,
    recurrence: Recurrence,
    max_iterations: u32,
    checker: &impl CancellationChecker,
) -> Result<IterationGrid> {
    let resolution = Resolution::new(axis_x.len() as u32, axis_y.len() as u32).validate()?;
    let width = resolution.width as usize;
    let mut cells = vec![0u32; resolution.cell_count()];

    trace!("begin assemble {}x{}", resolution.width, resolution.height);

    cells
        .par_chunks_mut(width)
        .zip(axis_y.values().par_iter())
        .try_for_each(|(row, &y)| {
            if checker.is_cancelled() {
                return Err(Error::Cancelled);
            }
            for (cell, &x) in row.iter_mut().zip(axis_x.values()) {
                *cell = recurrence.iterate(ComplexPoint::new(x, y), max_iterations);
            }
            Ok(())
        })?;

    trace!("end assemble");

    Ok(IterationGrid { resolution, cells })
}
