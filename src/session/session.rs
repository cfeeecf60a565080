use anyhow::Result;
use log::debug;
use std::io::Write;

use super::command::{Input, parse_input};
use super::reader::{LineReader, Prompt};
use super::ui;
use crate::translation::{Completer, TranslationRequest, build_messages};
use crate::ui::Spinner;

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub translated: usize,
    pub failed: usize,
}

/// The read → translate → print loop.
///
/// Each iteration is independent: a failed request is reported and the
/// loop asks for the next text.
pub struct TranslationSession<R, C, O, E> {
    reader: R,
    completer: C,
    out: O,
    err: E,
    show_progress: bool,
}

impl<R, C, O, E> TranslationSession<R, C, O, E>
where
    R: LineReader,
    C: Completer,
    O: Write,
    E: Write,
{
    pub const fn new(reader: R, completer: C, out: O, err: E) -> Self {
        Self {
            reader,
            completer,
            out,
            err,
            show_progress: false,
        }
    }

    /// Shows a spinner on stderr while waiting for the service.
    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Runs until an exit sentinel, a cancelled prompt or end of input.
    pub async fn run(&mut self) -> Result<SessionStats> {
        ui::print_header(&mut self.out)?;

        let mut stats = SessionStats::default();

        loop {
            let Some(line) = self.reader.read_line(Prompt::SourceText)? else {
                break;
            };

            let source_text = match parse_input(&line) {
                Input::Exit => break,
                Input::Empty => continue,
                Input::Text(text) => text,
            };

            let Some(target_language) = self.reader.read_line(Prompt::TargetLanguage)? else {
                break;
            };

            let request = TranslationRequest {
                source_text,
                target_language,
            };

            if self.translate_and_print(&request).await? {
                stats.translated += 1;
            } else {
                stats.failed += 1;
            }
        }

        ui::print_goodbye(&mut self.out)?;
        debug!("Session finished: {stats:?}");
        Ok(stats)
    }

    /// Returns whether the request succeeded. Only console I/O errors propagate.
    async fn translate_and_print(&mut self, request: &TranslationRequest) -> Result<bool> {
        let messages = build_messages(&request.target_language, &request.source_text);

        let spinner = Spinner::start("Translating...", self.show_progress);
        let result = self.completer.complete(&messages).await;
        spinner.stop();

        match result {
            Ok(completion) => {
                ui::print_translation(&mut self.out, &request.target_language, &completion)?;
                Ok(true)
            }
            Err(e) => {
                debug!("Translation failed: {e:?}");
                ui::print_error(&mut self.err, &e.to_string())?;
                Ok(false)
            }
        }
    }
}
