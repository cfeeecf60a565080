//! Session banners and result formatting.

use std::io::{self, Write};

use crate::translation::Completion;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {} - Language Translator",
        Style::header("tradu"),
        Style::version(format!("v{VERSION}"))
    )?;
    writeln!(out, "{}", Style::secondary("-".repeat(34)))
}

pub fn print_translation(
    out: &mut impl Write,
    language: &str,
    completion: &Completion,
) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        Style::success("Translation"),
        Style::value(format!("({language}):"))
    )?;
    writeln!(out, "{}", completion.content)?;

    if let Some(usage) = &completion.usage {
        let total = usage
            .total_tokens
            .map_or_else(|| "N/A".to_string(), |total| total.to_string());
        writeln!(out, "\n{}", Style::secondary(format!("Tokens used: {total}")))?;
    }

    out.flush()
}

pub fn print_error(err: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(
        err,
        "\n{} {message}",
        Style::error("Error during translation:")
    )?;
    err.flush()
}

pub fn print_goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", Style::success("Goodbye!"))?;
    out.flush()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::TokenUsage;

    fn render(completion: &Completion) -> String {
        let mut out = Vec::new();
        print_translation(&mut out, "Spanish", completion).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_translation_with_usage() {
        let text = render(&Completion {
            content: "Hola".to_string(),
            usage: Some(TokenUsage {
                total_tokens: Some(42),
                ..TokenUsage::default()
            }),
        });

        assert!(text.contains("Spanish"));
        assert!(text.contains("Hola"));
        assert!(text.contains("Tokens used"));
        assert!(text.contains("42"));
    }

    #[test]
    fn test_print_translation_without_usage() {
        let text = render(&Completion {
            content: "Hola".to_string(),
            usage: None,
        });

        assert!(text.contains("Hola"));
        assert!(!text.contains("Tokens used"));
    }

    #[test]
    fn test_print_translation_usage_without_total() {
        let text = render(&Completion {
            content: "Hola".to_string(),
            usage: Some(TokenUsage::default()),
        });

        assert!(text.contains("Tokens used"));
        assert!(text.contains("N/A"));
    }

    #[test]
    fn test_print_error_keeps_message() {
        let mut err = Vec::new();
        print_error(&mut err, "connection refused").unwrap();
        let text = String::from_utf8(err).unwrap();
        assert!(text.contains("connection refused"));
    }
}
