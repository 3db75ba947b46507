//! Main window ownership and the NoWindow/Visible state machine.

use anyhow::{Context, Result};
use log::debug;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::activate::{ActivationStrategy, present};

const WINDOW_TITLE: &str = "traywake";

/// Slot for the single main window.
///
/// Holds at most one occupant; closing the window empties the slot and the
/// next restore constructs a fresh instance.
pub(crate) struct WindowSlot<W> {
    inner: Option<W>,
}

impl<W> WindowSlot<W> {
    pub fn empty() -> Self {
        Self { inner: None }
    }

    pub fn get(&self) -> Option<&W> {
        self.inner.as_ref()
    }

    /// Fill the slot if it is empty. The constructor runs at most once per
    /// empty-to-filled transition.
    pub fn ensure_with(&mut self, create: impl FnOnce() -> Result<W>) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(create()?);
        }
        Ok(())
    }

    /// Empty the slot, handing the previous occupant to the caller.
    pub fn clear(&mut self) -> Option<W> {
        self.inner.take()
    }
}

/// The live window plus the state that travels with one visible episode.
pub struct MainWindow {
    window: Window,
}

impl MainWindow {
    fn create(event_loop: &ActiveEventLoop) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(640.0, 420.0));
        let window = event_loop
            .create_window(attributes)
            .context("failed to create main window")?;
        debug!("main window created ({:?})", window.id());
        Ok(Self { window })
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }
}

/// Owns the single application window across hide/show cycles.
pub struct WindowController {
    slot: WindowSlot<MainWindow>,
    strategy: ActivationStrategy,
}

impl WindowController {
    pub fn new(strategy: ActivationStrategy) -> Self {
        Self {
            slot: WindowSlot::empty(),
            strategy,
        }
    }

    /// True when `window_id` belongs to the live main window.
    pub fn owns(&self, window_id: WindowId) -> bool {
        self.slot
            .get()
            .map(|main| main.id() == window_id)
            .unwrap_or(false)
    }

    /// Construct the main window if the slot is empty.
    pub fn ensure_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        self.slot.ensure_with(|| MainWindow::create(event_loop))
    }

    /// Bring the main window back from the tray: recreate it if needed, then
    /// show it un-minimized and bring it to the foreground.
    pub fn restore(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        self.ensure_window(event_loop)?;
        let main = self
            .slot
            .get()
            .context("main window absent after ensure")?;
        present(&main.window, &self.strategy);
        Ok(())
    }

    /// Close interception: hide the window and drop it, leaving the tray icon
    /// as the only surface until the next restore.
    pub fn hide_to_tray(&mut self) {
        if let Some(main) = self.slot.clear() {
            main.window.set_visible(false);
            debug!("main window hidden to tray");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WindowSlot;
    use anyhow::anyhow;

    #[test]
    fn ensure_constructs_once() {
        let mut slot: WindowSlot<u32> = WindowSlot::empty();
        let mut built = 0u32;
        for _ in 0..3 {
            slot.ensure_with(|| {
                built += 1;
                Ok(built)
            })
            .unwrap();
        }
        assert_eq!(built, 1);
        assert_eq!(slot.get(), Some(&1));
    }

    #[test]
    fn clear_then_ensure_constructs_fresh() {
        let mut slot: WindowSlot<u32> = WindowSlot::empty();
        let mut built = 0u32;
        slot.ensure_with(|| {
            built += 1;
            Ok(built)
        })
        .unwrap();
        assert_eq!(slot.clear(), Some(1));
        assert!(slot.get().is_none());
        slot.ensure_with(|| {
            built += 1;
            Ok(built)
        })
        .unwrap();
        assert_eq!(slot.get(), Some(&2));
        assert_eq!(built, 2);
    }

    #[test]
    fn failed_construction_leaves_slot_empty() {
        let mut slot: WindowSlot<u32> = WindowSlot::empty();
        assert!(slot.ensure_with(|| Err(anyhow!("no lifecycle"))).is_err());
        assert!(slot.get().is_none());
    }

    #[test]
    fn clear_on_empty_slot_is_a_noop() {
        let mut slot: WindowSlot<u32> = WindowSlot::empty();
        assert_eq!(slot.clear(), None);
    }
}
