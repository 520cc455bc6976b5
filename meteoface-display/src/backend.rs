//! Display backend trait
//!
//! Defines the interface for different panel types.

use crate::layout::{Layer, Rect, TextStyle};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Area lies entirely off the panel
    InvalidCoordinates,
    /// Panel not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for drawing the face. Backends
/// with a frame buffer draw into it here and push it to the panel
/// separately, so every method is synchronous.
pub trait DisplayBackend {
    /// Clear the whole frame
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw the background into `area`
    fn draw_background(&mut self, area: Rect) -> Result<(), DisplayError>;

    /// Draw one text layer
    fn draw_text(&mut self, layer: Layer, text: &str, style: &TextStyle) -> Result<(), DisplayError>;

    /// Panel size in pixels (width, height)
    fn dimensions(&self) -> (u16, u16);
}
