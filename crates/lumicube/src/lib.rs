//! # Lumicube — Interactive Lit Cube
//!
//! A single flat-shaded cube rendered with wgpu and lit by an ambient term, a
//! directional light and a positional light. Arrow keys rotate the cube,
//! `W`/`S`/`A`/`D` move the positional light, and `1`–`4` switch the lights
//! on and off.
//!
//! Build a [`Demo`] and call [`run`](Demo::run).

pub mod config;
pub mod context;
pub mod controller;
pub mod demo;
pub mod error;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;
pub mod time;
pub(crate) mod window;

pub use config::DemoConfig;
pub use demo::Demo;
pub use error::{Error, Result};
