//! Frame timing and window input plumbing for hosts that render the scene.

pub mod clock;
pub mod input_adapter;

pub use clock::{FrameClock, FrameTick};
pub use input_adapter::PointerInput;
