// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fs, io, path::{Path, PathBuf}};


#[derive(Debug, thiserror::Error)]
pub(crate) enum InputError {
	#[error("cannot read input {}: {source}", .path.display())]
	Read { path: PathBuf, source: io::Error },
	#[error("no solution for day {0}")]
	UnknownDay(u8),
}


pub(crate) fn default_path(inputs: &Path, day: u8) -> PathBuf {
	inputs.join(format!("day{day:02}.txt"))
}

pub(crate) fn read(path: &Path) -> Result<String, InputError> {
	let input = fs::read_to_string(path)
		.map_err(|source| InputError::Read { path: path.to_owned(), source })?;
	tracing::debug!(path = %path.display(), bytes = input.len(), "loaded input");
	Ok(input)
}


#[test]
fn tests() {
	let dir = tempfile::tempdir().unwrap();
	let path = default_path(dir.path(), 1);
	assert_eq!(path.file_name().unwrap(), "day01.txt");
	assert_eq!(default_path(dir.path(), 12).file_name().unwrap(), "day12.txt");

	let error = read(&path).unwrap_err();
	assert!(matches!(&error, InputError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound));
	assert!(error.to_string().starts_with("cannot read input "));

	fs::write(&path, "R50\n# done\n").unwrap();
	assert_eq!(read(&path).unwrap(), "R50\n# done\n");

	assert_eq!(InputError::UnknownDay(7).to_string(), "no solution for day 7");
}
