use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::Result;

/// Reads a whole text file.
///
/// - UTF-8 content is returned as-is
/// - Anything else is decoded as Latin-1 (each byte is one code point)
pub fn read_text<P: AsRef<Path>>(filename: P) -> Result<String> {
	let bytes = fs::read(&filename)?;
	match String::from_utf8(bytes) {
		Ok(text) => Ok(text),
		Err(err) => {
			warn!(
				path = %filename.as_ref().display(),
				"file is not valid UTF-8, decoding as Latin-1"
			);
			Ok(decode_latin1(err.as_bytes()))
		}
	}
}

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Splits on `\n` / `\r\n`
/// - Blank lines are skipped
pub fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	Ok(read_text(filename)?
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

fn decode_latin1(bytes: &[u8]) -> String {
	bytes.iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::GenError;

	fn scratch_file(name: &str, contents: &[u8]) -> std::path::PathBuf {
		let path = std::env::temp_dir().join(format!("rs-markov-io-{}-{name}", std::process::id()));
		fs::write(&path, contents).unwrap();
		path
	}

	#[test]
	fn reads_utf8() {
		let path = scratch_file("utf8.txt", "caf\u{e9} cr\u{e8}me".as_bytes());
		assert_eq!(read_text(&path).unwrap(), "caf\u{e9} cr\u{e8}me");
		fs::remove_file(path).unwrap();
	}

	#[test]
	fn falls_back_to_latin1() {
		let path = scratch_file("latin1.txt", &[b'c', b'a', b'f', 0xE9]);
		assert_eq!(read_text(&path).unwrap(), "caf\u{e9}");
		fs::remove_file(path).unwrap();
	}

	#[test]
	fn read_lines_skips_blank_lines() {
		let path = scratch_file("words.txt", b"apple\r\n\nbanana\ncherry\n");
		assert_eq!(read_lines(&path).unwrap(), vec!["apple", "banana", "cherry"]);
		fs::remove_file(path).unwrap();
	}

	#[test]
	fn missing_file_is_io_error() {
		let result = read_text("/nonexistent/rs-markov/corpus.txt");
		assert!(matches!(result, Err(GenError::Io(_))));
	}
}
