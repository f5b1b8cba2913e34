//! Window management via winit.
//!
//! Implements [`winit::application::ApplicationHandler`] to drive the event
//! loop: window and GPU setup on resume, key tracking, and one
//! update-then-render tick per `RedrawRequested`.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::context::AppContext;
use crate::error::{Error, Result};
use crate::math::aspect_ratio;
use crate::render::{CubeRenderer, GpuContext, ShaderSources};

/// GPU state that exists only once the window does.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: CubeRenderer,
}

/// The application state that winit drives.
pub(crate) struct WinitApp {
    ctx: AppContext,
    sources: ShaderSources,
    graphics: Option<Graphics>,
    /// First fatal error; ends the event loop and is returned from `run`.
    error: Option<Error>,
}

impl WinitApp {
    pub fn new(ctx: AppContext, sources: ShaderSources) -> Self {
        Self {
            ctx,
            sources,
            graphics: None,
            error: None,
        }
    }

    /// Consume the app after the event loop returns.
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let (width, height) = self.ctx.config.size;
        let attrs = Window::default_attributes()
            .with_title(&self.ctx.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(width, height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let gpu = GpuContext::new(window.clone())?;
        let renderer = CubeRenderer::new(&gpu, &self.sources)?;
        log::info!("Renderer ready, starting render loop");

        Ok(Graphics {
            window,
            gpu,
            renderer,
        })
    }

    /// Stop the loop; the first error is kept for `finish`.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = &self.graphics else {
            return;
        };

        let (w, h) = graphics.gpu.surface_size();
        let plan = self.ctx.tick(aspect_ratio(w, h));

        match graphics.renderer.render(&graphics.gpu, &plan) {
            Ok(stats) => self.ctx.frame_rendered(stats),
            Err(err) => match recover(&err) {
                Recovery::Reconfigure => {
                    log::warn!("Surface lost or outdated, reconfiguring");
                    graphics.gpu.reconfigure();
                }
                Recovery::Skip => log::warn!("Surface error: {err:?}"),
                Recovery::Fatal(fatal) => {
                    self.fail(event_loop, fatal);
                    return;
                }
            },
        }

        graphics.window.request_redraw();
    }
}

/// What the loop does after a frame failed to reach the surface.
#[derive(Debug)]
enum Recovery {
    /// Reapply the surface configuration and keep going.
    Reconfigure,
    /// Drop this frame only.
    Skip,
    /// Stop the loop and report the error from `Demo::run`.
    Fatal(Error),
}

fn recover(err: &wgpu::SurfaceError) -> Recovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Recovery::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => Recovery::Fatal(Error::GpuOutOfMemory),
        _ => Recovery::Skip,
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() || self.error.is_some() {
            return;
        }

        match self.init_graphics(event_loop) {
            Ok(graphics) => {
                graphics.window.request_redraw();
                self.graphics = Some(graphics);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Focused(false) => self.ctx.release_keys(),

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key_code) = event.physical_key else {
                    return;
                };

                if key_code == KeyCode::Escape && event.state == ElementState::Pressed {
                    log::info!("Escape pressed, exiting.");
                    event_loop.exit();
                    return;
                }

                match event.state {
                    ElementState::Pressed => self.ctx.key_pressed(key_code, &event.logical_key),
                    ElementState::Released => self.ctx.key_released(key_code),
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_memory_is_reported_as_fatal() {
        let recovery = recover(&wgpu::SurfaceError::OutOfMemory);
        assert!(matches!(recovery, Recovery::Fatal(Error::GpuOutOfMemory)));
    }

    #[test]
    fn fatal_error_is_returned_after_the_loop() {
        let mut app = WinitApp::new(
            AppContext::new(crate::config::DemoConfig::default()),
            ShaderSources::default(),
        );
        app.error = Some(Error::GpuOutOfMemory);
        assert!(matches!(app.finish(), Err(Error::GpuOutOfMemory)));
    }

    #[test]
    fn lost_surfaces_are_reconfigured_and_timeouts_skipped() {
        assert!(matches!(recover(&wgpu::SurfaceError::Lost), Recovery::Reconfigure));
        assert!(matches!(recover(&wgpu::SurfaceError::Outdated), Recovery::Reconfigure));
        assert!(matches!(recover(&wgpu::SurfaceError::Timeout), Recovery::Skip));
    }
}
