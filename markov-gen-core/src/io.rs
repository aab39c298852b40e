use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Splits a text into whitespace-delimited tokens.
///
/// - Any Unicode whitespace run separates two tokens
/// - Tokens are returned unchanged (no case folding, no punctuation handling)
pub fn split_tokens(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

/// Pull-based token iterator over a buffered byte stream.
///
/// - Reads one buffer at a time; the whole input is never held as text
/// - Bytes are split on ASCII whitespace, then each word is decoded on its own
/// - Invalid UTF-8 inside a word becomes U+FFFD instead of failing the stream
/// - Non-ASCII whitespace (e.g. U+00A0) still separates tokens
pub struct Tokens<R> {
	reader: R,
	word: Vec<u8>,
	pending: VecDeque<String>,
	done: bool,
}

/// Returns an iterator over the tokens of `reader`.
pub fn tokens<R: BufRead>(reader: R) -> Tokens<R> {
	Tokens {
		reader,
		word: Vec::new(),
		pending: VecDeque::new(),
		done: false,
	}
}

/// Decodes the bytes of a finished word into tokens.
fn flush_word(word: &mut Vec<u8>, pending: &mut VecDeque<String>) {
	if word.is_empty() {
		return;
	}
	let text = String::from_utf8_lossy(word);
	pending.extend(text.split_whitespace().map(str::to_owned));
	word.clear();
}

/// ASCII bytes that Unicode counts as whitespace (vertical tab included).
fn is_space(byte: u8) -> bool {
	byte.is_ascii_whitespace() || byte == 0x0b
}

impl<R: BufRead> Iterator for Tokens<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(token) = self.pending.pop_front() {
				return Some(Ok(token));
			}
			if self.done {
				return None;
			}

			let buf = match self.reader.fill_buf() {
				Ok(buf) => buf,
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => {
					self.done = true;
					return Some(Err(e));
				}
			};
			if buf.is_empty() {
				self.done = true;
				flush_word(&mut self.word, &mut self.pending);
				continue;
			}

			// UTF-8 continuation bytes are never ASCII, so splitting here is safe
			for &byte in buf {
				if is_space(byte) {
					flush_word(&mut self.word, &mut self.pending);
				} else {
					self.word.push(byte);
				}
			}
			let consumed = buf.len();
			self.reader.consume(consumed);
		}
	}
}

/// Reads a whole stream and returns its tokens.
///
/// Typically used with `std::io::stdin()`. Only I/O failures are errors.
pub fn read_tokens<R: Read>(reader: R) -> io::Result<Vec<String>> {
	tokens(BufReader::new(reader)).collect()
}

/// Reads a text file and returns its tokens.
pub fn read_file_tokens<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	read_tokens(File::open(filename)?)
}
