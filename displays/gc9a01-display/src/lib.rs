//! Display surface abstraction and color model for the GC9A01 model
//!
//! This crate provides:
//! - `Surface` trait for whatever the host renders into
//! - `Framebuffer`, an in-memory `Surface` with read-back
//! - `Rgba` color type with RGB565 expansion and inversion
//! - `CircularMask` for the round visible area of the panel
//!
//! # Architecture
//!
//! The controller model only ever writes pixels; it never reads the surface
//! back. Hosts that composite the panel themselves implement `Surface`
//! directly. Tests and headless tools use `Framebuffer`.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod color;
pub mod framebuffer;
pub mod mask;
pub mod surface;

// Re-export key types
pub use color::Rgba;
pub use framebuffer::Framebuffer;
pub use mask::CircularMask;
pub use surface::{Surface, SurfaceError};
