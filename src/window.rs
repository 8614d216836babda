//! Windowing shell: the winit application handler and the `run` entry.
//!
//! The redraw handler re-requests itself, so frames arrive at the display
//! refresh rate (AutoVsync), one at a time, never overlapping. Pointer and
//! resize events are handled between frames on the same thread.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::RunError;
use crate::gpu::GpuState;
use crate::stage::Stage;

const WINDOW_TITLE: &str = "heartfield";
const DEFAULT_WIDTH: u32 = 1280;
const DEFAULT_HEIGHT: u32 = 720;

/// The winit application: window, GPU state and stage.
pub struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    stage: Option<Stage>,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            gpu_state: None,
            stage: None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    log::error!("window creation failed: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            let size = window.inner_size();
            self.window = Some(window.clone());

            match pollster::block_on(GpuState::new(window.clone())) {
                Ok(gpu_state) => self.gpu_state = Some(gpu_state),
                Err(e) => {
                    log::error!("GPU initialization failed: {}", e);
                    event_loop.exit();
                    return;
                }
            }

            self.stage = Some(Stage::new(size.width, size.height));
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if let Some(stage) = &mut self.stage {
                    stage.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(stage), Some(gpu_state)) = (&mut self.stage, &mut self.gpu_state) {
                    stage.advance();
                    match gpu_state.render(stage.canvas().vertices()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            event => {
                if let Some(stage) = &mut self.stage {
                    stage.handle_event(&event);
                }
            }
        }
    }
}

/// Open the window and run the demo until it is closed.
pub fn run() -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
