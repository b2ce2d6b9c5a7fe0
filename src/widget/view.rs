// src/widget/view.rs

/// Send-button label while idle.
pub const SEND_LABEL: &str = "Send";
/// Send-button label while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Presentation surface the widget controller drives.
///
/// Implementations own the actual elements (DOM nodes, terminal lines,
/// whatever); the controller only ever talks to this interface, so it can
/// be exercised without a rendered page.
pub trait ChatView {
    /// Current raw content of the message field.
    fn message_text(&self) -> String;
    /// Current raw content of the shared city field. The map picker (or
    /// the user) writes into it; the controller reads it at send time only.
    fn city_text(&self) -> String;
    /// Show or hide the chat surface.
    fn set_visible(&mut self, visible: bool);
    /// Move input focus to the message field.
    fn focus_message_input(&mut self);
    /// Disable the send control and swap its label to [`SENDING_LABEL`]
    /// (or restore [`SEND_LABEL`] when `sending` is false).
    fn set_sending(&mut self, sending: bool);
    /// Replace the displayed reply text.
    fn set_reply(&mut self, reply: &str);
}

/// What a click on the chat overlay actually hit. Dismissal fires only for
/// the backdrop itself, never for content whose event bubbled up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    PanelContent,
}

/// Keyboard input as the widget cares about it: Enter plus the platform's
/// primary modifier (Cmd or Ctrl) triggers a send, everything else is noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Enter { primary_modifier: bool },
    Other,
}
