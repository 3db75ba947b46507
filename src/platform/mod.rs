//! Platform abstraction layer
//!
//! Holds the single call this application makes below the toolkit: the
//! Win32 foreground-window primitive.

#[cfg(target_os = "windows")]
pub mod windows;
