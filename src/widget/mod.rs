// src/widget/mod.rs
pub mod transport;
pub mod view;

use tracing::warn;

use crate::message::{ChatRequest, city_or_default};

pub use transport::{ChatTransport, HttpTransport};
pub use view::{ChatView, ClickTarget, KeyInput};

/// Shown when the endpoint answered but carried no reply text.
pub const NO_REPLY_PLACEHOLDER: &str = "No reply received.";
/// Shown for any transport or response-format failure.
pub const SEND_FAILED_REPLY: &str = "I could not answer now. Try again.";

/// In-memory state of the chat surface. Lives as long as its widget; there
/// is no persistence and no reset short of rebuilding the widget.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    /// Whether the chat surface is currently shown.
    pub visible: bool,
    /// True strictly while a request is in flight. At most one request may
    /// be in flight at a time.
    pub pending: bool,
    /// Most recent text actually submitted (never empty once set).
    pub last_message: String,
    /// City that accompanied the most recent submission.
    pub city: String,
    /// Most recent displayed reply, including placeholder/fallback text.
    pub last_reply: Option<String>,
}

/// Whether [`ChatWidget::send`] issued a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    /// Empty input or a send already pending; nothing happened.
    Ignored,
}

/// Chat widget controller: visibility, the backdrop-dismiss contract, and
/// the single send/receive interaction.
///
/// The view and transport are injected, so the whole lifecycle runs without
/// a rendered page or a live endpoint.
pub struct ChatWidget<V, T> {
    view: V,
    transport: T,
    session: ChatSession,
}

impl<V: ChatView, T: ChatTransport> ChatWidget<V, T> {
    pub fn new(view: V, transport: T) -> Self {
        Self::from_parts(view, transport, ChatSession::default())
    }

    /// Build from an existing session, e.g. to restore visibility state.
    pub fn from_parts(view: V, transport: T, session: ChatSession) -> Self {
        Self { view, transport, session }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Reveal the chat surface and focus the message field. Idempotent.
    pub fn open(&mut self) {
        self.session.visible = true;
        self.view.set_visible(true);
        self.view.focus_message_input();
    }

    /// Hide the chat surface. Idempotent.
    pub fn close(&mut self) {
        self.session.visible = false;
        self.view.set_visible(false);
    }

    /// Click anywhere on the overlay. Dismisses only when the click target
    /// is exactly the backdrop, not content whose event bubbled.
    pub fn backdrop_clicked(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    /// Keyboard path to [`send`](Self::send): primary modifier + Enter
    /// while the message field has focus. Same contract as the button.
    pub async fn key_pressed(&mut self, input: KeyInput) -> SendOutcome {
        match input {
            KeyInput::Enter { primary_modifier: true } => self.send().await,
            _ => SendOutcome::Ignored,
        }
    }

    /// Run one send/receive cycle against the chat endpoint.
    ///
    /// Empty or whitespace-only input is a no-op, as is a call while a
    /// request is already pending. Every issued request ends back in the
    /// idle state: `pending` is cleared and the send control restored on
    /// success, empty reply, and failure alike.
    pub async fn send(&mut self) -> SendOutcome {
        let message = self.view.message_text().trim().to_string();
        if message.is_empty() || self.session.pending {
            return SendOutcome::Ignored;
        }
        let city = city_or_default(&self.view.city_text());

        self.session.pending = true;
        self.view.set_sending(true);

        let request = ChatRequest { message: message.clone(), city: city.clone() };
        // All three outcomes funnel through this match; there is no early
        // exit between setting and clearing `pending`.
        let reply = match self.transport.send(&request).await {
            Ok(response) if !response.reply.is_empty() => response.reply,
            Ok(_) => NO_REPLY_PLACEHOLDER.to_string(),
            Err(err) => {
                warn!(error = %err, "chat send failed");
                SEND_FAILED_REPLY.to_string()
            }
        };

        self.view.set_reply(&reply);
        self.session.last_message = message;
        self.session.city = city;
        self.session.last_reply = Some(reply);
        self.session.pending = false;
        self.view.set_sending(false);
        SendOutcome::Sent
    }
}
