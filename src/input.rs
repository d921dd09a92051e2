// ⌨️ Console input - whitespace tokens + pure numeric parsing
//
// Tokens are read the way stream extraction reads them: one
// whitespace-delimited word at a time, across line boundaries.
// Parsing never touches reader state; callers decide whether to
// discard the rest of the line and ask again.

use crate::error::InputFormatError;
use std::collections::VecDeque;
use std::io::{self, BufRead};

// ============================================================================
// TOKEN READER
// ============================================================================

pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        TokenReader {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading further lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.source.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }

            // Invalid UTF-8 becomes replacement chars rather than an error
            let line = String::from_utf8_lossy(&line);
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drop whatever is left of the line the last token came from
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Whole-token integer parse ("12abc" is rejected)
pub fn parse_int(token: &str) -> Result<i32, InputFormatError> {
    token.parse::<i32>().map_err(|_| InputFormatError {
        token: token.to_string(),
    })
}

/// Salary parse. Any finite float is accepted, including negatives.
pub fn parse_salary(token: &str) -> Result<f64, InputFormatError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputFormatError {
            token: token.to_string(),
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
