/// Events posted onto the event-loop thread by the tray listener threads.
#[derive(Clone, Debug)]
pub enum UserEvent {
    IconSelected,
    TrayAction(TrayAction),
}

#[derive(Clone, Debug)]
pub enum TrayAction {
    Show,
    Quit,
}
