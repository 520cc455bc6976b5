//! Watch face renderer
//!
//! Tracks whether the face needs redrawing and draws the display strings
//! through a backend. Any dirty layer redraws the whole frame: the backends
//! keep a frame buffer, so partial redraws would save nothing on the wire.

use meteoface_core::state::{DisplayStrings, Repaint};

use crate::backend::{DisplayBackend, DisplayError};
use crate::layout::{FaceLayout, Layer};

/// Draws the face on demand
#[derive(Debug, Clone)]
pub struct FaceRenderer {
    layout: FaceLayout,
    dirty: bool,
    blank: bool,
}

impl FaceRenderer {
    /// A new renderer starts blank; nothing draws until the face loads
    pub fn new(layout: FaceLayout) -> Self {
        Self {
            layout,
            dirty: false,
            blank: true,
        }
    }

    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    /// Fold in the repaint request from one dispatched event
    pub fn invalidate(&mut self, repaint: Repaint) {
        if repaint.blank {
            self.blank = true;
            self.dirty = true;
        } else if repaint.time || repaint.date || repaint.weather {
            self.blank = false;
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Draw if dirty. Returns whether anything was drawn.
    ///
    /// On error the renderer stays dirty so the next call retries.
    pub fn render<B: DisplayBackend>(
        &mut self,
        strings: &DisplayStrings,
        backend: &mut B,
    ) -> Result<bool, DisplayError> {
        if !self.dirty {
            return Ok(false);
        }

        backend.clear()?;
        if !self.blank {
            backend.draw_background(self.layout.background)?;
            for layer in Layer::ALL {
                let text = match layer {
                    Layer::Time => strings.time(),
                    Layer::Date => strings.date(),
                    Layer::Weather => strings.weather(),
                };
                backend.draw_text(layer, text, self.layout.layer(layer))?;
            }
        }

        self.dirty = false;
        Ok(true)
    }
}
