//! Panel driver and drawing backend

pub mod graphics;
pub mod sh1106;

pub use graphics::GraphicsBackend;
pub use sh1106::Sh1106;
