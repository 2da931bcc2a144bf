//! Pen color palette

use crate::config::ConfigError;

/// Linear RGBA color
pub type Color = [f32; 4];

/// Fixed, non-empty color list with a wrapping selection
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    current: usize,
}

impl Palette {
    pub fn new(colors: Vec<Color>, initial: usize) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if initial >= colors.len() {
            return Err(ConfigError::InitialColorOutOfRange {
                index: initial,
                len: colors.len(),
            });
        }
        Ok(Self {
            colors,
            current: initial,
        })
    }

    /// Index of the selected color
    pub fn index(&self) -> usize {
        self.current
    }

    /// The selected color
    pub fn current(&self) -> Color {
        self.colors[self.current]
    }

    /// Color at a palette index
    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Select the next color, wrapping to the first after the last
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.colors.len();
        self.current
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false, a palette cannot be built empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
