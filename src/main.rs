// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt, path::PathBuf, process::ExitCode};
use clap::Parser;
use num_bigint::BigUint;
use tracing_subscriber::EnvFilter;

mod input;


#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Answer {
	label: &'static str,
	value: BigUint,
}

impl Answer {
	pub(crate) fn new(label: &'static str, value: impl Into<BigUint>) -> Self {
		Answer { label, value: value.into() }
	}
}

impl fmt::Display for Answer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.label, self.value)
	}
}


type Solver = fn(&str) -> Vec<Answer>;

macro_rules! days {
	( $( $day:tt ),* $(,)? ) => { paste::paste! {
		$( mod [<day $day>]; )*

		fn solver(day: u8) -> Option<Solver> {
			match day {
				$( $day => Some([<day $day>]::answers as Solver), )*
				_ => None,
			}
		}
	} };
}

days!(01);


/// Solves a day's puzzle and prints the answers.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
	/// Day of the puzzle
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	day: u8,

	/// Input file to use instead of `dayNN.txt` in the inputs directory
	#[arg(short, long)]
	input: Option<PathBuf>,

	/// Directory holding `dayNN.txt` inputs
	#[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs"))]
	inputs: PathBuf,
}


fn run(args: Args) -> Result<Vec<Answer>, input::InputError> {
	let solve = solver(args.day)
		.ok_or(input::InputError::UnknownDay(args.day))?;
	let path = args.input
		.unwrap_or_else(|| input::default_path(&args.inputs, args.day));
	let input = input::read(&path)?;
	let answers = solve(&input);
	tracing::info!(day = args.day, ?answers, "solved");
	Ok(answers)
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	match run(Args::parse()) {
		Ok(answers) => {
			for answer in answers { println!("{answer}") }
			ExitCode::SUCCESS
		}
		Err(error) => {
			tracing::error!(%error, "giving up");
			eprintln!("error: {error}");
			ExitCode::FAILURE
		}
	}
}


#[test]
fn tests() {
	use clap::CommandFactory as _;
	Args::command().debug_assert();

	assert!(solver(2).is_none());
	let answers = solver(1).unwrap()("R50\n");
	assert_eq!(answers.iter().map(ToString::to_string).collect::<Vec<_>>(), [
		"Part 1: 0",
		"Part 2 (original): 1",
		"Part 2 (method 0x434C49434B): 1",
	]);

	let args = Args::try_parse_from(["advent25", "1", "--inputs", "nowhere"]).unwrap();
	assert!(matches!(run(args), Err(input::InputError::Read { .. })));
	let args = Args::try_parse_from(["advent25", "3"]).unwrap();
	assert!(matches!(run(args), Err(input::InputError::UnknownDay(3))));
	assert!(Args::try_parse_from(["advent25", "26"]).is_err());

	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("day01.txt"), "L68\nL30\nR48\nL5\n").unwrap();
	let inputs = dir.path().to_str().unwrap();
	let args = Args::try_parse_from(["advent25", "1", "--inputs", inputs]).unwrap();
	assert_eq!(run(args).unwrap()[0], Answer::new("Part 1", 95u64));

	let file = dir.path().join("other.txt");
	std::fs::write(&file, "# just a comment\nR250\n").unwrap();
	let args = Args::try_parse_from(["advent25", "1", "--input", file.to_str().unwrap()]).unwrap();
	assert_eq!(run(args).unwrap(), [
		Answer::new("Part 1", 0u64),
		Answer::new("Part 2 (original)", 1u64),
		Answer::new("Part 2 (method 0x434C49434B)", 3u64),
	]);
}
