//! Tray icon binding: one icon for the process lifetime, a single logical
//! "selected" event, and an optional lazily-installed context menu.

use std::thread;

use anyhow::{Context, Result};
use log::warn;
use tray_icon::menu::MenuEvent;
use tray_icon::{MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};
use winit::event_loop::EventLoopProxy;

use crate::config::TrayConfig;
use crate::model::UserEvent;
use crate::ui::icon::load_tray_icon;
use crate::ui::menu::{build_tray_menu, parse_menu_action};

const TOOLTIP: &str = "traywake";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrayMode {
    DirectOpen,
    ContextMenu,
}

impl TrayMode {
    pub fn from_config(config: &TrayConfig) -> Self {
        if config.use_context_menu {
            TrayMode::ContextMenu
        } else {
            TrayMode::DirectOpen
        }
    }
}

/// What a single tray-icon selection should do, given the mode and whether
/// the context menu has been installed yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionResponse {
    /// Direct-open mode: restore the main window.
    Restore,
    /// Menu mode, first selection: install the two-entry menu.
    InstallMenu,
    /// Menu mode, later selections: the shell presents the existing menu.
    PresentMenu,
}

pub(crate) fn selection_response(mode: TrayMode, menu_installed: bool) -> SelectionResponse {
    match mode {
        TrayMode::DirectOpen => SelectionResponse::Restore,
        TrayMode::ContextMenu if menu_installed => SelectionResponse::PresentMenu,
        TrayMode::ContextMenu => SelectionResponse::InstallMenu,
    }
}

pub struct TrayBinding {
    tray: TrayIcon,
    mode: TrayMode,
    menu_installed: bool,
}

impl TrayBinding {
    /// Create the tray icon. Runs once; the icon persists until process exit.
    pub fn new(config: &TrayConfig) -> Result<Self> {
        let icon = load_tray_icon().context("failed to load tray icon image")?;
        let tray = TrayIconBuilder::new()
            .with_icon(icon)
            .with_tooltip(TOOLTIP)
            .build()
            .context("failed to create tray icon")?;
        tray.set_visible(true).context("failed to show tray icon")?;

        Ok(Self {
            tray,
            mode: TrayMode::from_config(config),
            menu_installed: false,
        })
    }

    /// React to a tray-icon selection. Menu installation happens at most once
    /// per process lifetime; every other outcome is a pure decision.
    pub fn on_icon_selected(&mut self) -> SelectionResponse {
        let response = selection_response(self.mode, self.menu_installed);
        if response == SelectionResponse::InstallMenu {
            self.install_menu();
            self.menu_installed = true;
        }
        response
    }

    fn install_menu(&self) {
        match build_tray_menu() {
            Ok(menu) => self.tray.set_menu(Some(Box::new(menu))),
            Err(err) => warn!("failed to install tray menu: {err}"),
        }
    }
}

/// Forward tray-icon selections onto the event-loop thread.
pub fn spawn_selection_listener(proxy: EventLoopProxy<UserEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let receiver = TrayIconEvent::receiver().clone();
        for event in receiver.iter() {
            let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            else {
                continue;
            };
            if proxy.send_event(UserEvent::IconSelected).is_err() {
                break;
            }
        }
    })
}

/// Forward tray menu activations onto the event-loop thread.
pub fn spawn_menu_listener(proxy: EventLoopProxy<UserEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let receiver = MenuEvent::receiver().clone();
        for event in receiver.iter() {
            let Some(action) = parse_menu_action(event.id()) else {
                continue;
            };
            if proxy.send_event(UserEvent::TrayAction(action)).is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_open_always_restores() {
        for installed in [false, true] {
            assert_eq!(
                selection_response(TrayMode::DirectOpen, installed),
                SelectionResponse::Restore
            );
        }
    }

    #[test]
    fn menu_mode_installs_exactly_once() {
        let mut installed = false;
        let mut installs = 0;
        for _ in 0..5 {
            match selection_response(TrayMode::ContextMenu, installed) {
                SelectionResponse::InstallMenu => {
                    installs += 1;
                    installed = true;
                }
                SelectionResponse::PresentMenu => {}
                SelectionResponse::Restore => panic!("menu mode never restores directly"),
            }
        }
        assert_eq!(installs, 1);
    }

    #[test]
    fn mode_follows_config_flag() {
        let direct = TrayConfig {
            use_context_menu: false,
        };
        let menu = TrayConfig {
            use_context_menu: true,
        };
        assert_eq!(TrayMode::from_config(&direct), TrayMode::DirectOpen);
        assert_eq!(TrayMode::from_config(&menu), TrayMode::ContextMenu);
    }
}
