//! Meteoface display rendering
//!
//! Hardware-agnostic face layout and rendering. Panel drivers implement
//! `DisplayBackend`; `FaceRenderer` decides when and what to draw.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod face;
pub mod layout;

pub use backend::{DisplayBackend, DisplayError};
pub use face::FaceRenderer;
pub use layout::{Alignment, Color, FaceLayout, FontSize, Layer, Rect, TextStyle};
