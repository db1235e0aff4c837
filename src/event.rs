use crossterm::event::KeyEvent;

/// Terminal-side events feeding the main loop. Quit detection lives in the
/// app's keymap, which sees modifiers and the current input mode.
#[derive(Debug, Clone)]
pub enum Event {
    /// Emitted once when the event handler starts. Triggers the one-shot
    /// startup fetch of the todo collection; there is no later refresh.
    Init,
    /// Redraw heartbeat.
    Render,
    Key(KeyEvent),
}
