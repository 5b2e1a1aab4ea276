//! Console input sanitizing and prompting.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::defaults::INVALID_INPUT;

/// Accept `raw` only if it is a positive integer written with ASCII digits.
///
/// Signs, whitespace, decimal points and zero are all rejected.
pub fn filter_input(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<usize>().ok().filter(|&n| n > 0)
}

/// clap value parser built on [`filter_input`].
pub fn parse_positive(raw: &str) -> Result<usize, String> {
    filter_input(raw).ok_or_else(|| format!("'{raw}' is not a positive integer"))
}

/// Ask for a positive integer until one is entered.
///
/// Each rejected answer prints `Invalid input!` and repeats the prompt.
/// End of input is an error.
pub fn prompt_positive<R: BufRead, W: Write>(
    prompt: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<usize> {
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            anyhow::bail!("Input required: reached end of input at prompt '{}'", prompt.trim());
        }

        match filter_input(line.trim_end_matches(['\r', '\n'])) {
            Some(value) => return Ok(value),
            None => {
                writeln!(writer, "{INVALID_INPUT}")?;
                tracing::debug!(input = line.trim_end(), "rejected prompt input");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_filter_input() {
        assert_eq!(filter_input("invalid input"), None);
        assert_eq!(filter_input("-40"), None);
        assert_eq!(filter_input("0"), None);
        assert_eq!(filter_input("5"), Some(5));
    }

    #[test]
    fn test_filter_input_edge_cases() {
        assert_eq!(filter_input(""), None);
        assert_eq!(filter_input("+5"), None);
        assert_eq!(filter_input(" 5"), None);
        assert_eq!(filter_input("5.0"), None);
        assert_eq!(filter_input("000"), None);
        assert_eq!(filter_input("007"), Some(7));
        // Overflows usize
        assert_eq!(filter_input("99999999999999999999999999"), None);
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("12"), Ok(12));
        assert!(parse_positive("zero").unwrap_err().contains("zero"));
    }

    #[test]
    fn test_prompt_positive_reprompts() {
        let mut reader = Cursor::new("invalid input\n-40\n0\n5\n");
        let mut output = Vec::new();

        let value = prompt_positive("Size? ", &mut reader, &mut output).unwrap();
        assert_eq!(value, 5);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Size? ").count(), 4);
        assert_eq!(text.matches(INVALID_INPUT).count(), 3);
    }

    #[test]
    fn test_prompt_positive_handles_crlf() {
        let mut reader = Cursor::new("42\r\n");
        let mut output = Vec::new();
        assert_eq!(prompt_positive("N? ", &mut reader, &mut output).unwrap(), 42);
    }

    #[test]
    fn test_prompt_positive_eof() {
        let mut reader = Cursor::new("nope\n");
        let mut output = Vec::new();
        assert!(prompt_positive("N? ", &mut reader, &mut output).is_err());
    }
}
