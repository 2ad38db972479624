use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::config::Theme;
use crate::generator::{self, IdeaGenerator};
use crate::history::IdeaHistory;
use crate::models::{ClipboardStatus, CreativeIdea};
use rand::rngs::StdRng;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use tracing::{debug, info, warn};

pub enum BgMessage {
    /// `generation` is the shuffle generation the copy was issued in.
    CopyFinished {
        generation: u64,
        result: Result<(), ClipboardError>,
    },
}

pub struct App {
    pub should_quit: bool,
    pub theme: Theme,

    current: CreativeIdea,
    share_text: String,
    history: IdeaHistory,
    clipboard_status: ClipboardStatus,
    generation: u64,

    generator: IdeaGenerator,
    rng: StdRng,
    clipboard: Arc<Mutex<Box<dyn ClipboardWriter>>>,

    bg_rx: mpsc::Receiver<BgMessage>,
    bg_tx: mpsc::Sender<BgMessage>,
}

impl App {
    pub fn new(
        generator: IdeaGenerator,
        mut rng: StdRng,
        clipboard: Box<dyn ClipboardWriter>,
        theme: Theme,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let current = generator.generate(&mut rng);
        let share_text = generator::share_text(&current);

        Self {
            should_quit: false,
            theme,
            current,
            share_text,
            history: IdeaHistory::new(),
            clipboard_status: ClipboardStatus::Idle,
            generation: 0,
            generator,
            rng,
            clipboard: Arc::new(Mutex::new(clipboard)),
            bg_rx: rx,
            bg_tx: tx,
        }
    }

    pub fn current(&self) -> &CreativeIdea { &self.current }
    pub fn history(&self) -> &IdeaHistory { &self.history }
    pub fn clipboard_status(&self) -> ClipboardStatus { self.clipboard_status }
    pub fn share_text(&self) -> &str { &self.share_text }

    pub fn quit(&mut self) { self.should_quit = true; }

    pub fn shuffle(&mut self) {
        let next = self.generator.generate(&mut self.rng);
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
        self.share_text = generator::share_text(&self.current);
        self.clipboard_status = ClipboardStatus::Idle;
        self.generation += 1;
        debug!(generation = self.generation, title = %self.current.title, "shuffled idea");
    }

    /// Writes the share text on a background thread. The outcome is picked up
    /// by `poll_background`.
    pub fn copy(&mut self) {
        let text = self.share_text.clone();
        let generation = self.generation;
        let clipboard = Arc::clone(&self.clipboard);
        let tx = self.bg_tx.clone();

        thread::spawn(move || {
            let result = match clipboard.lock() {
                Ok(mut writer) => writer.write_text(&text),
                Err(_) => Err(ClipboardError::Unavailable(
                    "clipboard writer poisoned".to_string(),
                )),
            };
            let _ = tx.send(BgMessage::CopyFinished { generation, result });
        });
    }

    pub fn poll_background(&mut self) {
        while let Ok(msg) = self.bg_rx.try_recv() {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, msg: BgMessage) {
        match msg {
            BgMessage::CopyFinished { generation, result } => {
                // a shuffle happened since this copy was issued
                if generation != self.generation {
                    debug!(generation, current = self.generation, "dropping stale copy result");
                    return;
                }
                match result {
                    Ok(()) => {
                        info!(title = %self.current.title, "copied idea to clipboard");
                        self.clipboard_status = ClipboardStatus::Copied;
                    }
                    Err(e) => {
                        warn!(error = %e, "copy to clipboard failed");
                        self.clipboard_status = ClipboardStatus::Error;
                    }
                }
            }
        }
    }
}
