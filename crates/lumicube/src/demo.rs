//! Demo builder.
//!
//! [`Demo`] is the entry point: configure it, then call [`run`](Demo::run)
//! to open the window and drive the frame loop until the user quits.
//!
//! # Example
//!
//! ```no_run
//! use lumicube::{Demo, DemoConfig};
//!
//! fn main() -> lumicube::Result<()> {
//!     Demo::with_config(DemoConfig::default().title("cube").size(1024, 768)).run()
//! }
//! ```

use crate::config::DemoConfig;
use crate::context::AppContext;
use crate::error::Result;
use crate::render::ShaderSources;
use crate::window::WinitApp;

/// Configures and runs the lit-cube demo.
pub struct Demo {
    config: DemoConfig,
    sources: ShaderSources,
}

impl Demo {
    /// A demo with the default configuration and built-in shaders.
    pub fn new() -> Self {
        Self::with_config(DemoConfig::default())
    }

    pub fn with_config(config: DemoConfig) -> Self {
        Self {
            config,
            sources: ShaderSources::default(),
        }
    }

    /// Replace the shader sources (builder pattern). They must expose the
    /// same attribute and uniform names as the built-in pair.
    pub fn shaders(mut self, sources: ShaderSources) -> Self {
        self.sources = sources;
        self
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Open the window and run until it closes. Returns the first fatal
    /// error, such as a shader that fails to compile or link.
    pub fn run(self) -> Result<()> {
        log::info!(
            "Starting {} at {}x{}",
            self.config.title,
            self.config.size.0,
            self.config.size.1
        );

        let event_loop = winit::event_loop::EventLoop::new()?;
        let mut app = WinitApp::new(AppContext::new(self.config), self.sources);
        event_loop.run_app(&mut app)?;
        app.finish()
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn builder_keeps_config() {
        let demo = Demo::with_config(DemoConfig::default().title("spin").size(320, 240));
        assert_eq!(demo.config().title, "spin");
        assert_eq!(demo.config().size, (320, 240));
    }

    #[test]
    fn shaders_replace_sources() {
        let demo = Demo::new().shaders(ShaderSources {
            vertex: Cow::Borrowed("broken"),
            fragment: Cow::Borrowed("broken"),
        });
        assert_eq!(demo.sources.vertex, "broken");
    }
}
