//! Line input for the session: styled `inquire` prompts on a terminal,
//! plain buffered lines otherwise.

use anyhow::{Context, Result};
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::{self, BufRead, IsTerminal, Stdin, StdinLock, Stdout, Write};

use crate::translation::LanguageCompleter;
use crate::ui::is_prompt_cancelled;

/// The two questions the session asks on every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    SourceText,
    TargetLanguage,
}

impl Prompt {
    pub const fn message(self) -> &'static str {
        match self {
            Self::SourceText => "English text:",
            Self::TargetLanguage => "Target language:",
        }
    }

    pub const fn help(self) -> &'static str {
        match self {
            Self::SourceText => "Type 'salir', 'exit' or 'quit' to finish",
            Self::TargetLanguage => "e.g., Spanish, French, Italian",
        }
    }
}

/// Source of user input.
pub trait LineReader {
    /// Returns `Ok(None)` when the user cancelled or input ended.
    fn read_line(&mut self, prompt: Prompt) -> Result<Option<String>>;
}

impl<T: LineReader + ?Sized> LineReader for &mut T {
    fn read_line(&mut self, prompt: Prompt) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Interactive prompts with autocomplete for the target language.
pub struct InquireReader {
    render_config: RenderConfig<'static>,
}

impl InquireReader {
    pub fn new() -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self { render_config }
    }
}

impl Default for InquireReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for InquireReader {
    fn read_line(&mut self, prompt: Prompt) -> Result<Option<String>> {
        let text = Text::new(prompt.message())
            .with_render_config(self.render_config)
            .with_help_message(prompt.help());

        let answer = match prompt {
            Prompt::SourceText => text.prompt(),
            Prompt::TargetLanguage => text.with_autocomplete(LanguageCompleter).prompt(),
        };

        match answer {
            Ok(line) => Ok(Some(line)),
            Err(e) if is_prompt_cancelled(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads lines from any buffered source, echoing the prompt to `out`.
pub struct StdinReader<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> StdinReader<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: BufRead, W: Write> LineReader for StdinReader<R, W> {
    fn read_line(&mut self, prompt: Prompt) -> Result<Option<String>> {
        write!(self.out, "{} ", prompt.message())?;
        self.out.flush()?;

        let mut line = String::new();
        let bytes_read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Picks the reader that fits the process's stdin.
pub enum ConsoleReader {
    Interactive(InquireReader),
    Piped(StdinReader<StdinLock<'static>, Stdout>),
}

impl ConsoleReader {
    pub fn detect() -> Self {
        let stdin: Stdin = io::stdin();
        if stdin.is_terminal() {
            Self::Interactive(InquireReader::new())
        } else {
            Self::Piped(StdinReader::new(stdin.lock(), io::stdout()))
        }
    }
}

impl LineReader for ConsoleReader {
    fn read_line(&mut self, prompt: Prompt) -> Result<Option<String>> {
        match self {
            Self::Interactive(reader) => reader.read_line(prompt),
            Self::Piped(reader) => reader.read_line(prompt),
        }
    }
}
