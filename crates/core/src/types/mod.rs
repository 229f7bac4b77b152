//! Host-boundary types shared by apps and hosts

mod geometry;
mod input;
mod key;

pub use geometry::{in_rect, Vec2};
pub use input::{FrameInput, InputState};
pub use key::Key;
