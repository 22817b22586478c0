use winit::event::WindowEvent;

use crate::render::RenderCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demos.
pub trait App {
    /// Called once after the window and GPU exist, before the first frame.
    ///
    /// Pipelines, meshes and uniform buffers are created here.
    fn on_start(&mut self, ctx: &RenderCtx<'_>) {
        let _ = ctx;
    }

    /// Called for every window event, after input state has been updated.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
