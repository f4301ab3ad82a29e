//! @ai:module:intent Detect and reproduce a file's newline convention
//! @ai:module:layer domain
//! @ai:module:public_api LineEnding, split_lines
//! @ai:module:stateless true

/// @ai:intent Newline convention detected in a source file
///
/// Detection mirrors the legacy reader: the first `\r` encountered is
/// reported as `CrLf` without lookahead, and `\n` followed by `\r` is
/// reported as the unusual `LfCr` sequence. Both quirks are part of the
/// observable contract and are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    LfCr,
    Unknown,
}

impl LineEnding {
    /// @ai:intent Report the first newline sequence found in raw text
    /// @ai:example ("a\r\nb") -> CrLf
    /// @ai:example ("a\nb") -> Lf
    /// @ai:example ("abc") -> Unknown
    /// @ai:effects pure
    pub fn detect(text: &str) -> LineEnding {
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            match c {
                '\n' => {
                    return if chars.next() == Some('\r') {
                        LineEnding::LfCr
                    } else {
                        LineEnding::Lf
                    };
                }
                '\r' => return LineEnding::CrLf,
                _ => {}
            }
        }

        LineEnding::Unknown
    }

    /// @ai:intent Terminator written after every output line, including the last
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::LfCr => "\n\r",
            LineEnding::Unknown => "",
        }
    }
}

/// @ai:intent Split raw text into lines without their terminators
/// @ai:post `\n`, `\r\n`, and a lone `\r` all terminate a line; a trailing
///          terminator adds no empty line
/// @ai:effects pure
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_crlf() {
        assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::CrLf);
    }

    #[test]
    fn test_detect_lf() {
        assert_eq!(LineEnding::detect("a\nb"), LineEnding::Lf);
    }

    #[test]
    fn test_detect_lfcr() {
        assert_eq!(LineEnding::detect("a\n\rb"), LineEnding::LfCr);
    }

    #[test]
    fn test_detect_unknown_without_terminator() {
        assert_eq!(LineEnding::detect("abc"), LineEnding::Unknown);
        assert_eq!(LineEnding::Unknown.as_str(), "");
    }

    #[test]
    fn test_split_lines_handles_each_convention() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_trailing_content_is_a_line() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines(""), Vec::<String>::new());
    }
}
