//! Win32 foreground-window primitive.

use std::num::NonZeroIsize;

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::SetForegroundWindow;

/// Ask the shell to make the window with this handle the foreground window.
/// Returns false when the OS rejects the request.
pub fn set_foreground_window(hwnd: NonZeroIsize) -> bool {
    // SAFETY: the handle comes from a live winit window.
    unsafe { SetForegroundWindow(HWND(hwnd.get() as *mut core::ffi::c_void)).as_bool() }
}
