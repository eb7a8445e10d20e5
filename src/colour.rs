//! Hand-off to the colour mapping stage.
//!
//! Palettes are opaque names; only the renderer interprets them.

use bytemuck::{Pod, Zeroable};
use fnv::{FnvHashMap, FnvHashSet};
use log::trace;
use rayon::prelude::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::grid::IterationGrid;

/// Named colormap understood by a rendering collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Palette(String);

impl Palette {
    pub const HOT: &'static str = "hot";
    pub const SEISMIC: &'static str = "seismic";
    pub const PINK: &'static str = "pink";
    pub const HSV: &'static str = "hsv";
    pub const TWILIGHT_SHIFTED: &'static str = "twilight_shifted";

    /// Names the interactive tool offers.
    pub const OFFERED: [&'static str; 5] = [
        Self::HOT,
        Self::SEISMIC,
        Self::PINK,
        Self::HSV,
        Self::TWILIGHT_SHIFTED,
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_offered(&self) -> bool {
        Self::OFFERED.contains(&self.0.as_str())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Self::HOT)
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value range for the renderer's value-to-colour bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Legend {
    pub min: u32,
    pub max: u32,
}

impl Legend {
    pub fn for_grid(grid: &IterationGrid) -> Self {
        let cells = grid.cells();
        Self {
            min: cells.iter().copied().min().unwrap_or(0),
            max: cells.iter().copied().max().unwrap_or(0),
        }
    }
}

/// [`bytemuck`]-compatible colour input for a single cell.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, Default, PartialEq)]
pub struct ColourRange {
    pub escaped: u32,
    pub value: f32,
}

/// Histogram-based normalisation ([Wikipedia](https://en.wikipedia.org/wiki/Plotting_algorithms_for_the_Mandelbrot_set#Histogram_coloring)).
///
/// Each escaped cell gets the fraction of escaped cells with a strictly smaller
/// count, so values lie in `[0, 1)` and spread evenly regardless of the budget.
pub struct HistogramColouring {
    total_samples: usize,
    bucket_labels: Vec<u32>,
    histogram: FnvHashMap<u32, u32>,
    histogram_ranges: FnvHashMap<u32, f32>,
}

impl HistogramColouring {
    pub fn new() -> Self {
        Self {
            total_samples: 0,
            bucket_labels: Vec::new(),
            histogram: FnvHashMap::default(),
            histogram_ranges: FnvHashMap::default(),
        }
    }

    fn reset(&mut self) {
        self.total_samples = 0;
        self.bucket_labels.clear();
        self.histogram.clear();
        self.histogram_ranges.clear();
    }

    /// Normalise `grid` into one [`ColourRange`] per cell, in the grid's row-major order.
    ///
    /// Bounded cells (count 0) are left with `escaped == 0` and `value == 0.0`.
    pub fn colour_ranges(&mut self, grid: &IterationGrid) -> Vec<ColourRange> {
        trace!("begin colour_ranges");

        self.reset();

        for &count in grid.cells().iter().filter(|&&count| count != 0) {
            let value = self.histogram.entry(count).or_insert_with(|| {
                self.bucket_labels.push(count);
                0
            });
            *value += 1;
            self.total_samples += 1;
        }

        debug_assert_eq!(
            self.total_samples,
            self.histogram.values().map(|value| *value as usize).sum()
        );

        debug_assert!(
            self.bucket_labels.len()
                == self
                    .bucket_labels
                    .iter()
                    .copied()
                    .collect::<FnvHashSet<u32>>()
                    .len(),
            "bucket_labels contains duplicates: {:?}",
            self.bucket_labels
        );
        self.bucket_labels.sort_unstable();

        let mut acc = 0;
        let total_samples = self.total_samples as f32;
        for bucket_label in &self.bucket_labels {
            self.histogram_ranges
                .insert(*bucket_label, acc as f32 / total_samples);
            acc += self.histogram.get(bucket_label).copied().unwrap_or(0);
        }

        let cells = grid.cells();
        let mut colour_ranges = vec![ColourRange::default(); cells.len()];
        colour_ranges
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, colour_range)| {
                let count = cells[index];
                if count != 0 {
                    colour_range.escaped = 1;
                    colour_range.value = self
                        .histogram_ranges
                        .get(&count)
                        .copied()
                        .unwrap_or_default();
                }
            });

        trace!("end colour_ranges");

        colour_ranges
    }
}

impl Default for HistogramColouring {
    fn default() -> Self {
        Self::new()
    }
}
