use std::sync::Arc;

use dictionary::{Dictionary, DictionaryError, Entry};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::audio::AudioPlayer;
use crate::render::{self, Page};
use crate::search::SearchForm;
use crate::status::{Applied, LookupId, LookupSession, LookupTicket};
use crate::theme::Theme;
use crate::utilities::redraw;

pub const HELP: &str = "Type a word and press Enter to look it up.
  :play    play the pronunciation
  :theme   switch between light and dark
  :help    show this help
  :quit    leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Theme,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    UnknownCommand(String),
    Query(String),
}

pub fn parse_line(line: &str) -> Input {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Input::Query(line.to_owned());
    };
    match command.trim() {
        "play" | "p" => Input::Command(Command::Play),
        "theme" | "t" => Input::Command(Command::Theme),
        "help" | "h" | "?" => Input::Command(Command::Help),
        "quit" | "q" | "exit" => Input::Command(Command::Quit),
        other => Input::UnknownCommand(other.to_owned()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct LookupResult {
    pub id: LookupId,
    pub outcome: Result<Vec<Entry>, DictionaryError>,
}

pub struct App {
    dictionary: Arc<Dictionary>,
    player: AudioPlayer,
    theme: Theme,
    form: SearchForm,
    session: LookupSession,
    notice: Option<String>,
    results_tx: mpsc::UnboundedSender<LookupResult>,
    results_rx: Option<mpsc::UnboundedReceiver<LookupResult>>,
}

impl App {
    pub fn new(dictionary: Dictionary, player: AudioPlayer, theme: Theme) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            dictionary: Arc::new(dictionary),
            player,
            theme,
            form: SearchForm::default(),
            session: LookupSession::default(),
            notice: None,
            results_tx,
            results_rx: Some(results_rx),
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        self.notice = None;
        match parse_line(line) {
            Input::Query(text) => {
                self.form.set_query(text);
                self.submit();
            }
            Input::Command(Command::Theme) => self.theme.toggle(),
            Input::Command(Command::Play) => self.play(),
            Input::Command(Command::Help) => self.notice = Some(HELP.to_owned()),
            Input::Command(Command::Quit) => return Flow::Quit,
            Input::UnknownCommand(command) => {
                self.notice = Some(format!("Unknown command :{command}. Try :help."));
            }
        }
        Flow::Continue
    }

    fn submit(&mut self) {
        if let Some(word) = self.form.submit() {
            let ticket = self.session.begin(word);
            self.spawn_lookup(ticket);
        }
    }

    fn spawn_lookup(&self, ticket: LookupTicket) {
        let dictionary = Arc::clone(&self.dictionary);
        let results = self.results_tx.clone();
        tokio::spawn(async move {
            let LookupTicket { id, word, cancel } = ticket;
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(%word, "lookup superseded");
                    return;
                }
                outcome = dictionary.get_entries(&word) => outcome,
            };
            // the receiver only goes away on shutdown
            let _ = results.send(LookupResult { id, outcome });
        });
    }

    fn play(&mut self) {
        match self.session.status().summary().and_then(|s| s.audio_url) {
            Some(url) => {
                self.player.play(&url);
            }
            None => self.notice = Some("No pronunciation to play.".to_owned()),
        }
    }

    pub fn apply(&mut self, result: LookupResult) -> Applied {
        self.session.complete(result.id, result.outcome)
    }

    pub fn render(&self) -> String {
        let mut out = render::page(&Page {
            theme: self.theme,
            form: &self.form,
            status: self.session.status(),
        });
        if let Some(notice) = &self.notice {
            out.push('\n');
            out.push_str(notice);
            out.push('\n');
        }
        out
    }

    /// Runs until `:quit` or end of input, redrawing after every change.
    pub async fn run<R>(mut self, input: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut results = self
            .results_rx
            .take()
            .ok_or_else(|| anyhow::anyhow!("app is already running"))?;
        let mut lines = input.lines();
        redraw(&self.render(), self.session.status().is_loading())?;
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        tracing::debug!("input closed");
                        break;
                    };
                    if self.handle_line(&line) == Flow::Quit {
                        break;
                    }
                }
                Some(result) = results.recv() => {
                    if self.apply(result) == Applied::Stale {
                        continue;
                    }
                }
            }
            redraw(&self.render(), self.session.status().is_loading())?;
        }
        Ok(())
    }
}
