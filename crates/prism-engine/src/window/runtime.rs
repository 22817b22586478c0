use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::translate::translate_window_event;
use crate::input::{InputEvent, InputFrame, InputState, PointerMoveEvent};
use crate::time::FrameClock;

use super::virtual_cursor::VirtualCursor;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Hide and capture the cursor at startup (mouse-look demos).
    pub cursor_grab: bool,

    /// Close the window when Escape is pressed.
    pub exit_on_escape: bool,
}

impl RuntimeConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_cursor_grab(mut self, grab: bool) -> Self {
        self.cursor_grab = grab;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "prism".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            cursor_grab: false,
            exit_on_escape: true,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
pub struct RuntimeCtx {
    commands: Vec<Command>,
    cursor_grabbed: bool,
}

impl RuntimeCtx {
    fn new(cursor_grabbed: bool) -> Self {
        Self {
            commands: Vec::new(),
            cursor_grabbed,
        }
    }

    /// Whether the cursor is currently hidden and captured.
    pub fn cursor_grabbed(&self) -> bool {
        self.cursor_grabbed
    }

    pub fn set_cursor_grab(&mut self, grab: bool) {
        self.commands.push(Command::SetCursorGrab(grab));
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.commands.push(Command::SetTitle(title.into()));
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

enum Command {
    SetCursorGrab(bool),
    SetTitle(String),
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, drives `app` until it exits, then returns.
    ///
    /// Errors raised while creating the window or GPU are returned here
    /// after the event loop has shut down.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,

    cursor_grabbed: bool,
    /// Accumulated raw mouse motion while grabbed, reported as a pointer
    /// position so consumers see one kind of cursor event.
    virtual_cursor: VirtualCursor,

    exit_requested: bool,
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            cursor_grabbed: false,
            virtual_cursor: VirtualCursor::default(),
            exit_requested: false,
            error: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let mut entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        entry.with_gpu(|gpu| self.app.on_start(&gpu.render_ctx()));
        // Startup work (shader compilation, uploads) must not show up as the
        // first frame's dt.
        entry.with_clock_mut(|clock| clock.reset());
        entry.with_window(|w| w.request_redraw());

        self.window = Some(entry);

        if self.config.cursor_grab {
            self.apply_cursor_grab(true);
        }

        log::info!("window `{}` ready", self.config.title);
        Ok(())
    }

    fn apply_cursor_grab(&mut self, grab: bool) {
        let Some(entry) = &mut self.window else {
            return;
        };

        let grabbed = entry.with_window(|w| grab_cursor(w, grab));
        if grabbed == self.cursor_grabbed {
            return;
        }
        self.cursor_grabbed = grabbed;

        if let Some((x, y)) = entry.with_input_state(|s| s.pointer_pos) {
            self.virtual_cursor.place(x, y);
        }

        // The reported position jumps between the real and the virtual
        // cursor; consumers treat the next sample as a fresh entry.
        entry.with_mut(|f| f.input_state.apply_event(f.input_frame, InputEvent::PointerLeft));
        log::debug!("cursor grab {}", if grabbed { "on" } else { "off" });
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::SetCursorGrab(grab) => self.apply_cursor_grab(grab),
                Command::SetTitle(title) => {
                    if let Some(entry) = &self.window {
                        entry.with_window(|w| w.set_title(&title));
                    }
                }
                Command::Exit => self.request_exit(event_loop),
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = &mut self.window else {
            return;
        };

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let app = &mut self.app;
        let mut runtime_ctx = RuntimeCtx::new(self.cursor_grabbed);
        let mut app_control = AppControl::Continue;

        entry.with_mut(|fields| {
            let time = fields.clock.tick();

            // Scope to ensure `ctx` is dropped before mutating frame state.
            {
                let mut ctx = FrameCtx {
                    window: WindowCtx {
                        window: fields.window,
                    },
                    gpu: fields.gpu,
                    input: fields.input_state,
                    input_frame: fields.input_frame,
                    time,
                    runtime: &mut runtime_ctx,
                };

                app_control = app.on_frame(&mut ctx);
            }

            // Clear per-frame deltas after the frame is consumed.
            fields.input_frame.clear();
        });

        if app_control == AppControl::Exit {
            runtime_ctx.exit();
        }

        self.apply_commands(event_loop, runtime_ctx);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.error = Some(e);
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: every demo animates or reacts to held keys.
        if let Some(entry) = &self.window {
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
            event_loop.exit();
            return;
        }

        let app = &mut self.app;
        let cursor_grabbed = self.cursor_grabbed;

        let Some(entry) = &mut self.window else {
            return;
        };

        let mut app_control = AppControl::Continue;
        entry.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.window, &event, cursor_grabbed) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }
            app_control = app.on_window_event(&event);
        });

        if app_control == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => self.request_exit(event_loop),

            WindowEvent::KeyboardInput { event: key, .. }
                if self.config.exit_on_escape
                    && key.state == ElementState::Pressed
                    && key.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                self.request_exit(event_loop);
            }

            // Some platforms drop the grab when focus moves away.
            WindowEvent::Focused(true) if self.cursor_grabbed => {
                entry.with_window(|w| grab_cursor(w, true));
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if !self.cursor_grabbed {
            return;
        }
        let DeviceEvent::MouseMotion { delta: (dx, dy) } = event else {
            return;
        };
        let Some(entry) = &mut self.window else {
            return;
        };
        if !entry.with_window(|w| w.has_focus()) {
            return;
        }

        let step = self.virtual_cursor.advance(dx, dy);
        if step.rebased {
            log::trace!("virtual cursor re-based");
        }

        entry.with_mut(|f| {
            if step.rebased {
                f.input_state.apply_event(f.input_frame, InputEvent::PointerLeft);
            }
            let moved = PointerMoveEvent { x: step.x, y: step.y };
            f.input_state.apply_event(f.input_frame, InputEvent::PointerMoved(moved));
        });
    }
}

/// Captures (or releases) the cursor. Returns whether it ended up grabbed.
fn grab_cursor(window: &Window, grab: bool) -> bool {
    if !grab {
        if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("failed to release cursor: {e}");
        }
        window.set_cursor_visible(true);
        return false;
    }

    // Confined works on Windows/X11, Locked on macOS/Wayland.
    let result = window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));

    match result {
        Ok(()) => {
            window.set_cursor_visible(false);
            true
        }
        Err(e) => {
            log::warn!("cursor grab unavailable: {e}");
            false
        }
    }
}
