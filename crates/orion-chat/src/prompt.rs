//! Reading user messages from a line-based input.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Reads one message per line.
///
/// Keep a single `Prompt` for the whole session: the reader buffers ahead,
/// so lines that arrived together (piped input) would otherwise be lost.
pub struct Prompt<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> Prompt<R> {
    /// Creates a prompt reading from `reader`.
    #[inline]
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Returns the next line without its line ending, or `None` once the
    /// input is exhausted or unreadable.
    pub async fn next_message(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(err) => {
                error!("error reading input: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_every_piped_line() {
        let mut prompt = Prompt::new(&b"first\nsecond\r\n\nlast"[..]);

        assert_eq!(prompt.next_message().await.as_deref(), Some("first"));
        assert_eq!(prompt.next_message().await.as_deref(), Some("second"));
        assert_eq!(prompt.next_message().await.as_deref(), Some(""));
        assert_eq!(prompt.next_message().await.as_deref(), Some("last"));
        assert_eq!(prompt.next_message().await, None);
    }
}
