//! Renderer-facing frame data
//!
//! The simulation never draws. Each frame the view layer captures a
//! `FrameView` (screen-space, sway and camera already applied) and uploads
//! the block instances however it likes.

pub mod frame;
pub mod instance;

pub use frame::{FrameView, Rope};
pub use instance::BlockInstance;
