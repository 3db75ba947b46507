//! Tray context menu: two fixed entries, installed lazily by the binding.

use anyhow::Result;
use tray_icon::menu::{Menu, MenuId, MenuItem};

use crate::model::TrayAction;

pub const MENU_ID_SHOW: &str = "show";
pub const MENU_ID_QUIT: &str = "quit";

pub fn build_tray_menu() -> Result<Menu> {
    let menu = Menu::new();
    let show_item = MenuItem::with_id(MENU_ID_SHOW, "Show traywake", true, None);
    menu.append(&show_item)?;
    let quit_item = MenuItem::with_id(MENU_ID_QUIT, "Quit traywake", true, None);
    menu.append(&quit_item)?;
    Ok(menu)
}

pub fn parse_menu_action(id: &MenuId) -> Option<TrayAction> {
    match id.as_ref() {
        MENU_ID_SHOW => Some(TrayAction::Show),
        MENU_ID_QUIT => Some(TrayAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tray_actions() {
        assert!(matches!(
            parse_menu_action(&MenuId::new(MENU_ID_SHOW)),
            Some(TrayAction::Show)
        ));
        assert!(matches!(
            parse_menu_action(&MenuId::new(MENU_ID_QUIT)),
            Some(TrayAction::Quit)
        ));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        assert!(parse_menu_action(&MenuId::new("edit_config")).is_none());
    }
}
