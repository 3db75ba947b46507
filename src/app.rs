//! Application lifecycle: the winit event loop and the wiring between the
//! window controller and the tray binding.
//!
//! All window and tray state lives on the event-loop thread. Tray and menu
//! events arrive on their own threads and reach this loop only as user events
//! posted through the `EventLoopProxy`.

use anyhow::{Context, Result};
use log::debug;
use winit::event::{Event, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

use crate::activate::ActivationStrategy;
use crate::config::load_or_create_config;
use crate::model::{TrayAction, UserEvent};
use crate::tray::{SelectionResponse, TrayBinding, spawn_menu_listener, spawn_selection_listener};
use crate::window::WindowController;

pub fn run() -> Result<()> {
    let config = load_or_create_config().context("failed to load configuration")?;

    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .build()
        .context("failed to create event loop")?;
    let proxy = event_loop.create_proxy();
    let _selection_listener = spawn_selection_listener(proxy.clone());
    let _menu_listener = spawn_menu_listener(proxy);

    let strategy = ActivationStrategy::from_config(&config.activation);
    let mut controller = WindowController::new(strategy);
    let mut tray: Option<TrayBinding> = None;

    let mut fatal: Option<anyhow::Error> = None;
    let fatal_slot = &mut fatal;

    #[allow(deprecated)]
    let run_result = event_loop.run(move |event, event_loop| match event {
        Event::NewEvents(StartCause::Init) => {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
        Event::Resumed => {
            if let Err(err) = controller.ensure_window(event_loop) {
                *fatal_slot = Some(err);
                event_loop.exit();
                return;
            }
            if tray.is_none() {
                match TrayBinding::new(&config.tray) {
                    Ok(binding) => tray = Some(binding),
                    Err(err) => {
                        *fatal_slot = Some(err);
                        event_loop.exit();
                    }
                }
            }
        }
        Event::WindowEvent {
            window_id,
            event: WindowEvent::CloseRequested,
        } if controller.owns(window_id) => {
            controller.hide_to_tray();
        }
        Event::UserEvent(user_event) => match user_event {
            UserEvent::IconSelected => {
                let Some(binding) = tray.as_mut() else {
                    return;
                };
                match binding.on_icon_selected() {
                    SelectionResponse::Restore => {
                        if let Err(err) = controller.restore(event_loop) {
                            *fatal_slot = Some(err);
                            event_loop.exit();
                        }
                    }
                    SelectionResponse::InstallMenu | SelectionResponse::PresentMenu => {}
                }
            }
            UserEvent::TrayAction(TrayAction::Show) => {
                if let Err(err) = controller.restore(event_loop) {
                    *fatal_slot = Some(err);
                    event_loop.exit();
                }
            }
            UserEvent::TrayAction(TrayAction::Quit) => {
                debug!("quit requested from tray menu");
                event_loop.exit();
            }
        },
        _ => {}
    });

    run_result.context("event loop terminated with error")?;
    match fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
