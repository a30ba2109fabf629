//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Messages for async communication
//! - [`SwitcherState`] - Language switcher selection state

mod handlers;
mod messages;
mod switcher;

pub use messages::AppMessage;
pub use switcher::SwitcherState;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::domain::ConnectionState;
use crate::health;
use crate::i18n::{Language, Localizer};
use crate::traits::HttpClient;

/// Main application state.
pub struct App {
    /// Runtime configuration (backend URL, startup language)
    pub config: AppConfig,
    /// Backend connection status shown in the status card
    pub connection: ConnectionState,
    /// Localization context, passed to every render call
    pub localizer: Localizer,
    /// Language switcher selection state
    pub switcher: SwitcherState,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Whether the UI needs a redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Monotonic tick counter driving the checking spinner
    pub spinner_frame: usize,
    /// Sender half of the app message channel (cloned into tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver half, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Handle of the in-flight health probe, aborted on teardown
    probe_handle: Option<JoinHandle<()>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    /// Create a new app from a configuration.
    pub fn new(config: AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let localizer = Localizer::new(config.language);
        let switcher = SwitcherState::new(config.language);

        Self {
            config,
            connection: ConnectionState::new(),
            localizer,
            switcher,
            should_quit: false,
            needs_redraw: true,
            spinner_frame: 0,
            message_tx,
            message_rx: Some(message_rx),
            probe_handle: None,
        }
    }

    /// Spawn the one-shot health probe.
    ///
    /// The probe runs in the background and reports back through the app
    /// message channel. Its handle is retained so [`App::quit`] can abort
    /// it; a probe that outlives the app never touches state.
    pub fn start_probe(&mut self, client: Arc<dyn HttpClient>) {
        let tx = self.message_tx.clone();
        let base_url = self.config.backend_url.clone();

        let handle = tokio::spawn(async move {
            let status = health::probe_backend(client.as_ref(), &base_url).await;
            let _ = tx.send(AppMessage::HealthCheck { status });
        });

        self.probe_handle = Some(handle);
    }

    /// Whether a probe task has been spawned.
    pub fn probe_started(&self) -> bool {
        self.probe_handle.is_some()
    }

    /// Apply a message from the channel to app state.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::HealthCheck { status } => {
                self.connection.resolve(status);
                self.mark_dirty();
            }
        }
    }

    /// Activate a language: set it on the localizer and align the
    /// switcher highlight. Idempotent when the language is already
    /// active.
    pub fn activate_language(&mut self, language: Language) {
        self.switcher.highlight_language(language);
        if self.localizer.set_language(language) {
            tracing::info!(language = language.code(), "language changed");
            self.mark_dirty();
        }
    }

    /// Activate whatever the switcher currently highlights.
    pub fn activate_highlighted(&mut self) {
        self.activate_language(self.switcher.highlighted_language());
    }

    /// Advance animations. Only the checking spinner animates.
    pub fn tick(&mut self) {
        if self.connection.is_checking() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.mark_dirty();
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Quit the app, aborting the probe if it is still in flight.
    pub fn quit(&mut self) {
        if let Some(handle) = self.probe_handle.take() {
            handle.abort();
        }
        self.should_quit = true;
    }
}
