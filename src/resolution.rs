use bytemuck::{Pod, Zeroable};

use crate::error::{Error, Result};

/// Number of samples along each axis of a generated grid.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const DEFAULT: Self = Resolution {
        width: 500,
        height: 500,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> Result<Self> {
        if self.width < 1 || self.height < 1 {
            return Err(Error::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::DEFAULT
    }
}
