//! Window activation policy.
//!
//! The toolkit's focus request is the behavior under observation here: on
//! Windows it can decline to raise a freshly re-shown window. The override
//! strategy goes straight to the Win32 foreground primitive and keeps the
//! toolkit request as the fallback when that call reports failure.

use std::num::NonZeroIsize;

use log::debug;
use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::window::Window;

use crate::config::ActivationConfig;

/// Surface operations needed to restore and foreground the main window.
pub trait WindowSurface {
    fn set_visible(&self, visible: bool);
    fn set_minimized(&self, minimized: bool);
    fn request_focus(&self);
    /// Native Win32 handle, when the surface is backed by one.
    fn win32_handle(&self) -> Option<NonZeroIsize>;
}

impl WindowSurface for Window {
    fn set_visible(&self, visible: bool) {
        Window::set_visible(self, visible);
    }

    fn set_minimized(&self, minimized: bool) {
        Window::set_minimized(self, minimized);
    }

    fn request_focus(&self) {
        self.focus_window();
    }

    fn win32_handle(&self) -> Option<NonZeroIsize> {
        match self.window_handle().map(|handle| handle.as_raw()) {
            Ok(RawWindowHandle::Win32(handle)) => Some(handle.hwnd),
            _ => None,
        }
    }
}

/// How a restored window is brought to the foreground.
#[derive(Clone, Copy, Debug)]
pub enum ActivationStrategy {
    /// The toolkit's own focus request.
    Toolkit,
    /// Win32 `SetForegroundWindow`, falling back to the toolkit request when
    /// the call fails or the surface has no native handle.
    NativeForeground {
        set_foreground: fn(NonZeroIsize) -> bool,
    },
}

impl ActivationStrategy {
    pub fn from_config(config: &ActivationConfig) -> Self {
        if config.use_native_foreground {
            #[cfg(target_os = "windows")]
            return ActivationStrategy::NativeForeground {
                set_foreground: crate::platform::windows::set_foreground_window,
            };
            #[cfg(not(target_os = "windows"))]
            debug!("native foreground override is windows-only; using toolkit activation");
        }
        ActivationStrategy::Toolkit
    }

    pub fn activate(&self, surface: &dyn WindowSurface) {
        match self {
            ActivationStrategy::Toolkit => surface.request_focus(),
            ActivationStrategy::NativeForeground { set_foreground } => {
                let raised = surface
                    .win32_handle()
                    .map(|handle| set_foreground(handle))
                    .unwrap_or(false);
                if !raised {
                    debug!("native foreground call did not raise the window; using toolkit request");
                    surface.request_focus();
                }
            }
        }
    }
}

/// Show the surface un-minimized and bring it to the foreground.
pub fn present(surface: &dyn WindowSurface, strategy: &ActivationStrategy) {
    surface.set_visible(true);
    surface.set_minimized(false);
    strategy.activate(surface);
}
