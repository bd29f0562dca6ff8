//! Word source: splits raw text into dictionary tokens.
//!
//! A token is a maximal run of ASCII letters and apostrophes. Every other
//! byte (whitespace, punctuation, digits, non-ASCII) is a delimiter, so
//! empty tokens are never produced. Case is left as found.

use std::io::{self, BufRead, BufReader, Read};

#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'\''
}

/// Lazy token iterator over any reader.
pub struct Words<R> {
    reader: BufReader<R>,
    done: bool,
}

impl<R: Read> Words<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            done: false,
        }
    }

    fn next_word(&mut self) -> io::Result<Option<String>> {
        let mut word = String::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                self.done = true;
                return Ok((!word.is_empty()).then_some(word));
            }

            let mut used = 0;
            let mut ended = false;
            for &b in buf {
                used += 1;
                if is_word_byte(b) {
                    word.push(b as char);
                } else if !word.is_empty() {
                    ended = true;
                    break;
                }
            }
            self.reader.consume(used);
            if ended {
                return Ok(Some(word));
            }
        }
    }
}

impl<R: Read> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_word() {
            Ok(Some(w)) => Some(Ok(w)),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Tokens of an in-memory string.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_ascii_alphabetic() || c == '\''))
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
}
