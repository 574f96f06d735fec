//! Application systems
//!
//! The frame driver itself lives in `driftfield_core` as the Animator; the
//! window system here covers the host side of the loop.

mod window;

pub use window::{WindowError, WindowSystem};
