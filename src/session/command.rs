/// Inputs that end the session, compared case-insensitively.
pub const EXIT_SENTINELS: &[&str] = &["salir", "exit", "quit"];

/// What the user typed at the source-text prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Text to translate, exactly as entered.
    Text(String),
    Exit,
    Empty,
}

pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        Input::Empty
    } else if is_exit_sentinel(trimmed) {
        Input::Exit
    } else {
        Input::Text(line.to_string())
    }
}

pub fn is_exit_sentinel(input: &str) -> bool {
    let input = input.trim();
    EXIT_SENTINELS
        .iter()
        .any(|sentinel| input.eq_ignore_ascii_case(sentinel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   \t"), Input::Empty);
    }

    #[test]
    fn test_parse_text_input_kept_verbatim() {
        assert_eq!(
            parse_input("  Hello, world!  "),
            Input::Text("  Hello, world!  ".to_string())
        );
    }

    #[test]
    fn test_parse_exit_sentinels_any_case() {
        for line in ["salir", "Exit", "QUIT", "SaLiR", " quit "] {
            assert_eq!(parse_input(line), Input::Exit, "{line:?} should exit");
        }
    }

    #[test]
    fn test_sentinel_must_be_whole_input() {
        assert_eq!(
            parse_input("quit smoking"),
            Input::Text("quit smoking".to_string())
        );
        assert!(!is_exit_sentinel("exiting"));
    }
}
