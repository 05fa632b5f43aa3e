use crate::gallery::Gallery;
use crate::page::ClickTarget;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch,
    Open(usize),
    Click(ClickTarget),
    Show,
    State,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(word) => word,
            None => return Err("empty command".to_string()),
        };

        match command {
            "fetch" => Ok(Command::Fetch),
            "open" => {
                let position = words
                    .next()
                    .ok_or("usage: open <position>")?
                    .parse()
                    .map_err(|_| "position must be a number".to_string())?;
                Ok(Command::Open(position))
            }
            "close" => Ok(Command::Click(ClickTarget::CloseButton)),
            "click-background" => Ok(Command::Click(ClickTarget::Background)),
            "click-content" => Ok(Command::Click(ClickTarget::Content)),
            "show" => Ok(Command::Show),
            "state" => Ok(Command::State),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

const HELP: &str = "commands: fetch, open <n>, close, click-background, click-content, show, state, quit\n";

/// Line-oriented driver for the gallery page. `fetch` runs in the
/// background so it can be re-triggered while a request is in flight.
pub struct Session {
    gallery: Arc<Gallery>,
}

impl Session {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery: Arc::new(gallery),
        }
    }

    pub async fn run(self) -> Result<()> {
        info!("Interactive session started");

        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        stdout.write_all(HELP.as_bytes()).await?;
        stdout.flush().await?;

        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    stdout.write_all(format!("{e}\n").as_bytes()).await?;
                    stdout.flush().await?;
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }

            let reply = self.handle_command(command).await;
            stdout.write_all(reply.as_bytes()).await?;
            stdout.flush().await?;
        }

        info!("Interactive session ended");
        Ok(())
    }

    async fn handle_command(&self, command: Command) -> String {
        debug!("Handling command {:?}", command);

        match command {
            Command::Fetch => {
                let gallery = self.gallery.clone();
                tokio::spawn(async move {
                    let outcome = gallery.fetch().await;
                    debug!("Background fetch finished: {:?}", outcome);
                });
                "fetching...\n".to_string()
            }
            Command::Open(position) => {
                let mut page = self.gallery.page().await;
                match page.activate(position) {
                    Some(overlay) => format!("{}\n", overlay.markup()),
                    None => format!("no entry at position {position}\n"),
                }
            }
            Command::Click(target) => {
                let mut page = self.gallery.page().await;
                if page.click(target) {
                    "overlay closed\n".to_string()
                } else {
                    "nothing happened\n".to_string()
                }
            }
            Command::Show => self.gallery.page().await.render(),
            Command::State => {
                let page = self.gallery.page().await;
                match page.overlay() {
                    Some(overlay) => format!(
                        "{} ({} entries): {}\n",
                        page.state(),
                        page.entries().len(),
                        overlay.item().title
                    ),
                    None => format!("{} ({} entries)\n", page.state(), page.entries().len()),
                }
            }
            Command::Help => HELP.to_string(),
            Command::Quit => {
                warn!("Quit reached the command handler");
                String::new()
            }
        }
    }
}
