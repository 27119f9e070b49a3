use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::coords::{IVec2, Size};
use crate::core::{App, AppControl, Screen, ScreenConfig};
use crate::device::{CanvasPresenter, Gpu, GpuInit};
use crate::input::platform::winit::apply_window_event;
use crate::input::RawInput;

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window described by `config` and drives `app` until it exits.
    ///
    /// Each redraw runs one tick: the screen consumes the input snapshot,
    /// `app.on_tick` draws, and the canvas is presented. The loop stops when
    /// the app returns [`AppControl::Exit`], calls [`Screen::close`], the
    /// window is closed, or the surface fails fatally.
    pub fn run<A>(config: ScreenConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let screen = Screen::new(&config)?;
        let gpu_init = gpu_init.with_vsync(config.vsync);

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, screen, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: ScreenConfig,
    gpu_init: GpuInit,
    screen: Screen,
    app: A,

    raw: RawInput,
    window: Option<WindowEntry>,
    presenter: Option<CanvasPresenter>,

    exit_requested: bool,
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: ScreenConfig, gpu_init: GpuInit, screen: Screen, app: A) -> Self {
        Self {
            config,
            gpu_init,
            screen,
            app,
            raw: RawInput::default(),
            window: None,
            presenter: None,
            exit_requested: false,
            error: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn fail(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        self.request_exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let size = self.config.window_size();
        let pos = self.config.position;

        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(size.width, size.height))
            .with_position(PhysicalPosition::new(pos.x, pos.y));
        if self.config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        let inner = entry.with_window(|w| w.inner_size());
        self.raw = RawInput::with_window(Size::new(inner.width, inner.height));
        self.presenter = Some(entry.with_gpu(|gpu| CanvasPresenter::new(gpu)));
        self.window = Some(entry);

        log::info!(
            "window {}x{} for a {}x{} canvas",
            inner.width,
            inner.height,
            self.config.size.width,
            self.config.size.height
        );
        Ok(())
    }

    fn destroy_window_entry(&mut self) {
        // Presenter resources belong to the device; release them first.
        self.presenter = None;
        self.window = None;
    }

    /// Runs one tick and presents the result.
    fn redraw(&mut self) {
        let time = self.screen.tick(&self.raw);

        if self.app.on_tick(&mut self.screen, time.dt) == AppControl::Exit
            || !self.screen.should_exist()
        {
            self.request_exit();
            return;
        }

        let (Some(entry), Some(presenter)) = (self.window.as_mut(), self.presenter.as_mut())
        else {
            return;
        };

        let screen = &self.screen;
        let presented =
            entry.with_gpu_mut(|gpu| presenter.present(gpu, screen.canvas(), screen.viewport()));

        if time.fps_updated {
            let title = screen.title();
            entry.with_window(|w| w.set_title(&title));
        }

        match presented {
            Err(action) if !action.is_recoverable() => {
                self.fail(anyhow::anyhow!("surface failed fatally ({action:?}); shutting down"));
            }
            _ => {}
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(e.context("failed to create initial window"));
            event_loop.exit();
            return;
        }

        self.app.on_start(&mut self.screen);
        // Window, GPU and on_start time is not part of the first tick.
        self.screen.reset_clock();

        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            self.destroy_window_entry();
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: one tick per presented frame.
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            self.destroy_window_entry();
            event_loop.exit();
            return;
        }

        apply_window_event(&mut self.raw, &event);

        match &event {
            WindowEvent::CloseRequested => self.request_exit(),

            WindowEvent::Moved(pos) => {
                self.screen.set_window_pos(IVec2::new(pos.x, pos.y));
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    self.raw.window_size = Size::new(new_size.width, new_size.height);
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }

        if self.exit_requested {
            self.destroy_window_entry();
            event_loop.exit();
        }
    }
}
