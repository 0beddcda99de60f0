use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Vec2;
use crate::core::{logical_viewport, App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuConfig};
use crate::input::PointerTracker;
use crate::time::FrameClock;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "wirecube".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
            resizable: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, brings up the GPU, hands it to `app`, then drives one
    /// frame per redraw until the window closes.
    ///
    /// Returns the first startup failure (window, GPU, or
    /// [`App::on_gpu_ready`]); a normal close returns `Ok(())`. The app, and
    /// every GPU resource it owns, is dropped before this returns.
    pub fn run<A>(config: RuntimeConfig, gpu_config: GpuConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    pointer: PointerTracker,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_config: GpuConfig,
    app: A,

    entry: Option<(WindowId, WindowEntry)>,
    failure: Option<anyhow::Error>,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_config: GpuConfig, app: A) -> Self {
        Self {
            config,
            gpu_config,
            app,
            entry: None,
            failure: None,
        }
    }

    fn create_window_entry(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(WindowId, WindowEntry)> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;
        let id = window.id();

        let gpu_config = self.gpu_config.clone();
        let entry = WindowEntryTryBuilder {
            pointer: PointerTracker::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_config)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        entry
            .with_gpu(|gpu| self.app.on_gpu_ready(gpu))
            .context("application startup failed")?;

        log::info!("window `{}` ready", self.config.title);
        Ok((id, entry))
    }

    /// Drops the window (and its GPU context) and stops the loop.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.take().is_some() {
            log::debug!("window destroyed");
        }
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        self.shutdown(event_loop);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (app, Some((_, entry))) = (&mut self.app, self.entry.as_mut()) else {
            return;
        };

        let control = entry.with_mut(|fields| {
            let viewport = logical_viewport(fields.window);
            if !viewport.is_valid() {
                // Minimized: nothing to project onto.
                return AppControl::Continue;
            }

            let time = fields.clock.tick();
            if let Some(fps) = time.fps {
                log::debug!(
                    "frame {}: {fps:.1} fps (last dt {:.2} ms)",
                    time.frame_index,
                    time.dt * 1000.0
                );
            }

            let mut ctx = FrameCtx {
                window: WindowCtx {
                    window: fields.window,
                },
                gpu: fields.gpu,
                pointer: fields.pointer.sample(viewport),
                time,
            };
            app.on_frame(&mut ctx)
        });

        if control == AppControl::Exit {
            self.shutdown(event_loop);
        }
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.failure.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok((id, entry)) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some((id, entry));
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the picture follows the cursor every frame.
        if let Some((_, entry)) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        match &self.entry {
            Some((id, _)) if *id == window_id => {}
            _ => return,
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some((_, entry)) = self.entry.as_mut() {
                    entry.with_mut(|fields| {
                        fields.pointer.moved(to_logical(fields.window, position));
                    });
                }
            }

            WindowEvent::Resized(new_size) => {
                if let Some((_, entry)) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some((_, entry)) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn to_logical(window: &Window, pos: PhysicalPosition<f64>) -> Vec2 {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    Vec2::new(logical.x as f32, logical.y as f32)
}
