use anyhow::Result;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// Endpoint returning `{"content": "...", "author": "..."}`
pub const QUOTE_ENDPOINT: &str = "https://api.quotable.io/random";

/// A motivational quote
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

/// Fixed fallback list used when the remote service is unavailable
static LOCAL_QUOTES: &[(&str, &str)] = &[
    (
        "Discipline is the bridge between goals and accomplishment.",
        "Jim Rohn",
    ),
    (
        "Do something today that your future self will thank you for.",
        "Sean Patrick Flanery",
    ),
    ("It always seems impossible until it's done.", "Nelson Mandela"),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "Great things are done by a series of small things brought together.",
        "Vincent van Gogh",
    ),
    ("Dream big. Start small. Act now.", "Robin Sharma"),
    (
        "Action is the foundational key to all success.",
        "Pablo Picasso",
    ),
    (
        "Don't watch the clock; do what it does. Keep going.",
        "Sam Levenson",
    ),
    ("Either you run the day, or the day runs you.", "Jim Rohn"),
];

/// Picks local quotes pseudo-randomly without repeating an entry until the
/// whole list has been shown, then starts a new cycle.
///
/// History is in-memory only; a new session starts a fresh cycle.
#[derive(Debug, Default)]
pub struct QuoteRotation {
    shown: HashSet<usize>,
}

impl QuoteRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> Quote {
        if self.shown.len() == LOCAL_QUOTES.len() {
            self.shown.clear();
        }

        let mut rng = rand::thread_rng();
        let idx = loop {
            let candidate = rng.gen_range(0..LOCAL_QUOTES.len());
            if !self.shown.contains(&candidate) {
                break candidate;
            }
        };
        self.shown.insert(idx);

        let (content, author) = LOCAL_QUOTES[idx];
        Quote {
            content: content.to_string(),
            author: author.to_string(),
        }
    }
}

/// Outcome of a remote fetch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Fetched(Quote),
    /// Network error or non-success status; caller falls back to the local
    /// list for this request only
    Failed,
}

/// Runs quote requests on background threads so the UI thread never blocks
/// on the network.
///
/// Each request carries a generation number; a response from a superseded
/// request is discarded on poll, so it can never overwrite a newer one.
#[derive(Debug)]
pub struct QuoteFetcher {
    tx: Sender<(u64, FetchOutcome)>,
    rx: Receiver<(u64, FetchOutcome)>,
    generation: u64,
}

impl QuoteFetcher {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            generation: 0,
        }
    }

    /// Start a new request, superseding any still in flight
    pub fn request(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();

        thread::spawn(move || {
            let outcome = match fetch_remote() {
                Ok(quote) => FetchOutcome::Fetched(quote),
                Err(_) => FetchOutcome::Failed,
            };
            // The receiver may be gone on shutdown; nothing to do then
            let _ = tx.send((generation, outcome));
        });
    }

    /// Drain completed requests, keeping only the current generation
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        let mut latest = None;
        while let Ok((generation, outcome)) = self.rx.try_recv() {
            if generation == self.generation {
                latest = Some(outcome);
            }
        }
        latest
    }
}

impl Default for QuoteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// One GET against the quote service; no explicit timeout is enforced
fn fetch_remote() -> Result<Quote> {
    let response = reqwest::blocking::get(QUOTE_ENDPOINT)?.error_for_status()?;
    Ok(response.json()?)
}
