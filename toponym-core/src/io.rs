use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::model::snapshot::Snapshot;

/// Reads a corpus file and returns one training word per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Empty lines are skipped
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/towns.txt` + `"bin"` → `data/towns.bin`
pub fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Writes a snapshot to disk using the compact postcard encoding.
pub fn write_snapshot<P: AsRef<Path>>(
	path: P,
	snapshot: &Snapshot,
) -> Result<(), Box<dyn std::error::Error>> {
	let bytes = postcard::to_stdvec(snapshot)?;
	fs::write(path, bytes)?;
	Ok(())
}

/// Reads a postcard-encoded snapshot from disk.
///
/// The bytes are decoded back into a plain value; consistency with the
/// alphabet is only checked when a model is built from it.
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot, Box<dyn std::error::Error>> {
	let bytes = fs::read(path)?;
	Ok(postcard::from_bytes(&bytes)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::markov_model::Model;

	#[test]
	fn output_path_swaps_the_extension() {
		let path = build_output_path("data/towns.txt", "bin").unwrap();
		assert_eq!(path, PathBuf::from("data/towns.bin"));
	}

	#[test]
	fn snapshot_survives_the_postcard_round_trip() {
		let snapshot = Model::new(&["ab", "ba"], 2, 0.0).export_snapshot();
		let bytes = postcard::to_stdvec(&snapshot).unwrap();
		let decoded: Snapshot = postcard::from_bytes(&bytes).unwrap();
		assert_eq!(decoded, snapshot);
	}

	#[test]
	fn corpus_file_round_trip() {
		let dir = std::env::temp_dir();
		let path = dir.join("toponym-corpus-test.txt");
		fs::write(&path, "abingdon\n\nacle\r\nacton\n").unwrap();
		let words = read_corpus(&path).unwrap();
		fs::remove_file(&path).ok();
		assert_eq!(words, vec!["abingdon", "acle", "acton"]);
	}
}
