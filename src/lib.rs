//! Driftfield application library
//!
//! Exposes the configuration layer and host-side systems so integration
//! tests can drive them; the particle engine itself lives in
//! `driftfield_core` and the GPU backend in `driftfield_render`.

pub mod config;
pub mod systems;
