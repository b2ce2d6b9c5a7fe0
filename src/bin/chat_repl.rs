//! Line-oriented terminal front-end for the chat widget. Talks to a
//! running chat service (`CHAT_ENDPOINT`, default localhost:3000).

use tokio::io::{AsyncBufReadExt, BufReader};

use lifeplants_chat::config::Config;
use lifeplants_chat::widget::view::{ChatView, SENDING_LABEL};
use lifeplants_chat::widget::{ChatWidget, HttpTransport, SendOutcome};

struct TerminalView {
    message: String,
    city: String,
}

impl ChatView for TerminalView {
    fn message_text(&self) -> String {
        self.message.clone()
    }

    fn city_text(&self) -> String {
        self.city.clone()
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            println!("-- chat open --");
        } else {
            println!("-- chat closed --");
        }
    }

    fn focus_message_input(&mut self) {}

    fn set_sending(&mut self, sending: bool) {
        if sending {
            println!("[{SENDING_LABEL}]");
        }
    }

    fn set_reply(&mut self, reply: &str) {
        println!("coach: {reply}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let view = TerminalView { message: String::new(), city: String::new() };
    let mut widget = ChatWidget::new(view, HttpTransport::new(&config.chat_endpoint));

    widget.open();
    println!("Ask about your plants. /city <name> sets the city, /quit leaves.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line == "/quit" {
            break;
        }
        if let Some(city) = line.strip_prefix("/city ") {
            widget.view_mut().city = city.trim().to_string();
            println!("city set to {}", widget.view().city);
            continue;
        }
        widget.view_mut().message = line;
        if widget.send().await == SendOutcome::Ignored {
            println!("(type a question first)");
        }
    }

    widget.close();
    Ok(())
}
