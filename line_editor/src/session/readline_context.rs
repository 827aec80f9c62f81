// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiSurface, CompletionProvider, CrosstermEventResult, EchoMode, History,
            Key, KeyBindingTable, KeyHandler, PinnedInputStream, RawModeGuard,
            ReadlineError, SpecialKey, TerminalSurface, convert_key_event};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt as _;
use miette::IntoDiagnostic as _;
use std::fmt::{Debug, Formatter};

/// Everything a read needs that outlives a single read: the history, the completion
/// provider, and the key bindings.
///
/// ```no_run
/// use r3bl_line_editor::ReadlineContext;
///
/// # async fn run() -> miette::Result<()> {
/// let mut context = ReadlineContext::default().with_history_enabled(true);
/// let answer = context.read_line("Continue? [y/n] ", "y").await?;
/// let password = context.read_password_line("Password: ").await?;
/// # Ok(())
/// # }
/// ```
pub struct ReadlineContext {
    pub history: History,
    /// When set, each line that a (non password) read returns is appended to
    /// [`Self::history`]. Off by default.
    pub history_enabled: bool,
    pub completion_provider: Option<Box<dyn CompletionProvider>>,
    pub key_bindings: KeyBindingTable,
}

impl Default for ReadlineContext {
    fn default() -> Self {
        Self {
            history: History::new(),
            history_enabled: false,
            completion_provider: None,
            key_bindings: KeyBindingTable::new(),
        }
    }
}

impl Debug for ReadlineContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadlineContext")
            .field("history", &self.history)
            .field("history_enabled", &self.history_enabled)
            .field("completion_provider", &self.completion_provider.is_some())
            .field("key_bindings", &self.key_bindings.len())
            .finish()
    }
}

impl ReadlineContext {
    #[must_use]
    pub fn with_history_enabled(mut self, history_enabled: bool) -> Self {
        self.history_enabled = history_enabled;
        self
    }

    #[must_use]
    pub fn with_completion_provider(
        mut self,
        completion_provider: impl CompletionProvider + 'static,
    ) -> Self {
        self.completion_provider = Some(Box::new(completion_provider));
        self
    }

    #[must_use]
    pub fn with_key_bindings(mut self, key_bindings: KeyBindingTable) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    #[must_use]
    pub fn with_history_max_size(mut self, max_size: usize) -> Self {
        self.history.set_max_size(max_size);
        self
    }

    #[must_use]
    pub fn history(&self) -> &History { &self.history }

    pub fn history_mut(&mut self) -> &mut History { &mut self.history }

    /// Read one line from `input`, drawing on `surface`.
    ///
    /// If the line is empty or whitespace, and `default` is not, then `default` is
    /// returned and nothing is added to the history. Otherwise the line is returned
    /// as is, and added to the history if that is enabled (even when it is empty).
    pub async fn read(
        &mut self,
        surface: &mut dyn TerminalSurface,
        input: &mut PinnedInputStream<CrosstermEventResult>,
        default: &str,
    ) -> Result<String, ReadlineError> {
        let line = read_session(
            surface,
            input,
            self.history.all(),
            self.completion_provider.as_deref(),
            &self.key_bindings,
        )
        .await?;

        if line.trim().is_empty() && !default.trim().is_empty() {
            tracing::debug!(message = "using default", default);
            return Ok(default.to_string());
        }

        if self.history_enabled {
            self.history.add([line.as_str()]);
        }

        Ok(line)
    }

    /// Read one line without history browsing or completion. The history is never
    /// changed. Masking the echo is up to `surface` (see [`EchoMode`]).
    pub async fn read_password(
        &mut self,
        surface: &mut dyn TerminalSurface,
        input: &mut PinnedInputStream<CrosstermEventResult>,
    ) -> Result<String, ReadlineError> {
        read_session(surface, input, &[], None, &self.key_bindings).await
    }

    /// Read one line from the real terminal. Raw mode is enabled for the duration of
    /// the read.
    pub async fn read_line(&mut self, prompt: &str, default: &str) -> miette::Result<String> {
        let _raw_mode = RawModeGuard::try_new().into_diagnostic()?;
        let mut surface = AnsiSurface::try_new_stdout(prompt).into_diagnostic()?;
        let mut input: PinnedInputStream<CrosstermEventResult> =
            Box::pin(EventStream::new());
        Ok(self.read(&mut surface, &mut input, default).await?)
    }

    /// Read a password from the real terminal, echoing [`EchoMode::password`] mask
    /// chars.
    pub async fn read_password_line(&mut self, prompt: &str) -> miette::Result<String> {
        let _raw_mode = RawModeGuard::try_new().into_diagnostic()?;
        let mut surface = AnsiSurface::try_new_stdout(prompt)
            .into_diagnostic()?
            .with_echo_mode(EchoMode::password());
        let mut input: PinnedInputStream<CrosstermEventResult> =
            Box::pin(EventStream::new());
        Ok(self.read_password(&mut surface, &mut input).await?)
    }
}

/// Write the prompt, then feed events to a fresh [`KeyHandler`] until one of them ends
/// the session.
async fn read_session(
    surface: &mut dyn TerminalSurface,
    input: &mut PinnedInputStream<CrosstermEventResult>,
    history: &[String],
    completion_provider: Option<&dyn CompletionProvider>,
    bindings: &KeyBindingTable,
) -> Result<String, ReadlineError> {
    surface.write_prompt()?;
    surface.flush()?;

    tracing::debug!(message = "session start", history_len = history.len());
    let mut handler = KeyHandler::new(surface, history, completion_provider, bindings);

    while let Some(result_crossterm_event) = input.next().await {
        if let Some(line) = apply_event(&mut handler, result_crossterm_event?)? {
            tracing::debug!(message = "session end", line_len = line.len());
            return Ok(line);
        }
    }

    tracing::debug!(message = "input closed");
    Err(ReadlineError::InputClosed)
}

/// Returns the accepted line when `event` ends the session.
fn apply_event(
    handler: &mut KeyHandler<'_>,
    event: Event,
) -> Result<Option<String>, ReadlineError> {
    match event {
        Event::Key(crossterm_key_event) => {
            let Some(key_event) = convert_key_event(&crossterm_key_event) else {
                return Ok(None);
            };

            if key_event.key == Key::SpecialKey(SpecialKey::Enter) {
                return handler.accept().map(Some);
            }

            if key_event.mask.is_ctrl_only() && key_event.key == Key::from_char('c') {
                tracing::debug!(message = "interrupted");
                handler.accept()?;
                return Err(ReadlineError::Interrupted);
            }

            handler.handle(&key_event)?;
        }
        Event::Resize(columns, rows) => {
            handler.resize(usize::from(columns), usize::from(rows))?;
        }
        _ => {}
    }
    Ok(None)
}
