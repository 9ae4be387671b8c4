use super::ctx::{FrameCtx, WindowCtx};

/// What the runtime should do after an app callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the viewer.
pub trait App {
    /// Called once before the first frame, after the window and GPU exist.
    fn on_start(&mut self, window: &WindowCtx<'_>) {
        let _ = window;
    }

    /// Called for every redraw. Input gathered since the previous frame is in
    /// [`FrameCtx::input`] and is cleared after this returns.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
