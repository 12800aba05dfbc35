// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use num_bigint::BigUint;
use crate::Answer;


const DIAL_SIZE: u64 = 100;
const DIAL_START: u64 = 50;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction { Left, Right }

/// A rotation of `turns` full turns plus `clicks` (less than `DIAL_SIZE`)
/// more clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Rotation {
	direction: Direction,
	turns: BigUint,
	clicks: u64,
}

impl Rotation {
	fn new(direction: Direction, clicks: BigUint) -> Self {
		use num_integer::Integer as _;
		let (turns, clicks) = clicks.div_rem(&BigUint::from(DIAL_SIZE));
		let clicks = clicks.iter_u64_digits().next().unwrap_or(0);
		Rotation { direction, turns, clicks }
	}
}


/// Position of the dial, always in `0..DIAL_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dial(u64);

impl Default for Dial {
	fn default() -> Self {
		Dial(DIAL_START)
	}
}

impl Dial {
	fn rotated(self, rotation: &Rotation) -> Self {
		use num_modular::ModularCoreOps as _;
		Dial(match rotation.direction {
			Direction::Left => self.0.subm(rotation.clicks, &DIAL_SIZE),
			Direction::Right => self.0.addm(rotation.clicks, &DIAL_SIZE),
		})
	}

	/// Clicks during `rotation` that leave the dial pointing at 0. The
	/// starting position is not one of them.
	fn zero_clicks(self, rotation: &Rotation) -> BigUint {
		let (start, clicks, size) = (self.0 as i64, rotation.clicks as i64, DIAL_SIZE as i64);

		// Unbounded positions visited after the full turns, inclusive.
		let (first, last) = match rotation.direction {
			Direction::Left => (start - clicks, start - 1),
			Direction::Right => (start + 1, start + clicks),
		};

		let multiples = num_integer::div_floor(last, size) - num_integer::div_floor(first - 1, size);
		&rotation.turns + multiples as u64
	}
}


#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Tally {
	dial: Dial,
	/// Rotations that ended with the dial at 0.
	landings: u64,
	/// Individual clicks that left the dial at 0.
	clicks: BigUint,
}

impl Tally {
	fn after(self, rotation: Rotation) -> Self {
		let dial = self.dial.rotated(&rotation);
		Tally {
			dial,
			landings: self.landings + u64::from(dial.0 == 0),
			clicks: self.clicks + self.dial.zero_clicks(&rotation),
		}
	}
}

fn tally(rotations: impl IntoIterator<Item = Rotation>) -> Tally {
	rotations.into_iter().fold(Tally::default(), Tally::after)
}


fn input_rotations_from_str(s: &str) -> impl Iterator<Item = Rotation> + '_ {
	s.lines()
		.enumerate()
		.filter_map(|(l, line)| match line.trim().parse::<Rotation>() {
			Ok(rotation) => Some(rotation),
			Err(error) => {
				tracing::trace!(line = l + 1, ?error, "skipping non-instruction");
				None
			}
		})
}


#[cfg(test)]
fn part1_impl(input_rotations: impl IntoIterator<Item = Rotation>) -> u64 {
	tally(input_rotations).dial.0
}

#[cfg(test)]
fn part2_impl(input_rotations: impl IntoIterator<Item = Rotation>) -> u64 {
	tally(input_rotations).landings
}

#[cfg(test)]
fn part2_clicks_impl(input_rotations: impl IntoIterator<Item = Rotation>) -> (BigUint, u64) {
	let Tally { dial, clicks, .. } = tally(input_rotations);
	(clicks, dial.0)
}


pub(crate) fn answers(input: &str) -> Vec<Answer> {
	let Tally { dial, landings, clicks } = tally(input_rotations_from_str(input));
	vec![
		Answer::new("Part 1", dial.0),
		Answer::new("Part 2 (original)", landings),
		Answer::new("Part 2 (method 0x434C49434B)", clicks),
	]
}


mod parsing {
	use std::{fmt, str::FromStr};
	use num_bigint::{BigUint, ParseBigIntError};
	use super::{Direction, Rotation, DIAL_SIZE};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RotationError {
		Empty,
		Direction(char),
		Digit { column: usize, found: char },
		Clicks(ParseBigIntError),
	}

	impl FromStr for Rotation {
		type Err = RotationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut chars = s.chars();
			let direction = match chars.next() {
				Some('L') => Direction::Left,
				Some('R') => Direction::Right,
				Some(c) => return Err(RotationError::Direction(c)),
				None => return Err(RotationError::Empty),
			};
			let digits = chars.as_str();
			if let Some((c, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
				return Err(RotationError::Digit { column: c + 2, found })
			}
			let clicks = BigUint::from_str(digits)
				.map_err(RotationError::Clicks)?;
			Ok(Rotation::new(direction, clicks))
		}
	}

	impl fmt::Display for Rotation {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			let d = match self.direction { Direction::Left => 'L', Direction::Right => 'R' };
			write!(f, "{d}{}", &self.turns * DIAL_SIZE + self.clicks)
		}
	}
}


#[test]
fn tests() {
	use Direction::*;

	const INPUT: &str = indoc::indoc! { "
		L68
		L30
		R48
		L5
		R60
		L55
		L1
		L99
		R14
		L82
	" };
	assert_eq!(part1_impl(input_rotations_from_str(INPUT)), 32);
	assert_eq!(part2_impl(input_rotations_from_str(INPUT)), 3);
	assert_eq!(part2_clicks_impl(input_rotations_from_str(INPUT)), (6u64.into(), 32));

	let rotation = |direction, clicks: u64| Rotation::new(direction, clicks.into());
	assert_eq!("L0".parse::<Rotation>().ok(), Some(rotation(Left, 0)));
	assert_eq!("R007".parse::<Rotation>().ok(), Some(rotation(Right, 7)));
	assert_eq!(rotation(Right, 1234), Rotation { direction: Right, turns: 12u64.into(), clicks: 34 });
	assert_eq!(rotation(Left, 1234).to_string(), "L1234");
	assert!(matches!("".parse::<Rotation>(), Err(parsing::RotationError::Empty)));
	assert!(matches!("X5".parse::<Rotation>(), Err(parsing::RotationError::Direction('X'))));
	assert!(matches!("R".parse::<Rotation>(), Err(parsing::RotationError::Clicks(_))));
	assert!(matches!("R+5".parse::<Rotation>(),
		Err(parsing::RotationError::Digit { column: 2, found: '+' })));
	assert!(matches!("L12 # left".parse::<Rotation>(),
		Err(parsing::RotationError::Digit { column: 4, found: ' ' })));
	assert!(matches!("R٥".parse::<Rotation>(),
		Err(parsing::RotationError::Digit { column: 2, found: '٥' })));

	let huge = "R99999999999999999999999".parse::<Rotation>().unwrap();
	assert_eq!(huge.turns.to_string(), "999999999999999999999");
	assert_eq!(huge.clicks, 99);

	let noisy = indoc::indoc! { "
		# comment
		  R5

		X5
		R
		l3
		L2
	" };
	assert_eq!(input_rotations_from_str(noisy).collect::<Vec<_>>(), [
		rotation(Right, 5),
		rotation(Left, 2),
	]);

	let run = |input: &str| {
		let Tally { dial, landings, clicks } = tally(input_rotations_from_str(input));
		(dial.0, landings, u128::try_from(clicks).unwrap())
	};
	assert_eq!(run("R50"), (0, 1, 1));
	assert_eq!(run("L50"), (0, 1, 1));
	assert_eq!(run("R10\nL10"), (50, 0, 0));
	assert_eq!(run("R200"), (50, 0, 2));
	assert_eq!(run("L200"), (50, 0, 2));
	assert_eq!(run("X5\nR"), (50, 0, 0));
	assert_eq!(run(""), (50, 0, 0));
	assert_eq!(run("R0"), (50, 0, 0));
	assert_eq!(run("R٥"), (50, 0, 0));

	// Leaving 0 is not a click on 0; coming back around is.
	assert_eq!(run("L50\nL5"), (95, 1, 1));
	assert_eq!(run("L50\nR5"), (5, 1, 1));
	assert_eq!(run("L50\nL100"), (0, 2, 2));
	assert_eq!(run("L50\nR250"), (50, 1, 3));
	assert_eq!(run("R49\nR1\nL1\nR1"), (0, 2, 2));

	// Magnitudes past `u64::MAX` still turn the dial.
	assert_eq!(run(&format!("R{}", u64::MAX)), (65, 0, 184467440737095516));
	assert_eq!(run("R100000000000000000000"), (50, 0, 1_000_000_000_000_000_000));
	assert_eq!(run("L100000000000000000050"), (0, 1, 1_000_000_000_000_000_001));
	assert_eq!(run("R99999999999999999999999\nL1"), (48, 0, 1_000_000_000_000_000_000_000));

	assert_eq!(answers(INPUT).iter().map(ToString::to_string).collect::<Vec<_>>(), [
		"Part 1: 32",
		"Part 2 (original): 3",
		"Part 2 (method 0x434C49434B): 6",
	]);
	assert_eq!(answers("R1000000000000000000000000000000")[2].to_string(),
		"Part 2 (method 0x434C49434B): 10000000000000000000000000000");
}


#[cfg(test)]
mod proptests {
	use itertools::Itertools as _;
	use proptest::prelude::*;
	use super::*;

	fn direction(left: bool) -> Direction {
		if left { Direction::Left } else { Direction::Right }
	}

	fn rotations() -> impl Strategy<Value = Vec<(Direction, u64)>> {
		prop::collection::vec((any::<bool>().prop_map(direction), 0..1_000u64), 0..40)
	}

	fn built(rotations: &[(Direction, u64)]) -> Vec<Rotation> {
		rotations.iter().map(|&(direction, clicks)| Rotation::new(direction, clicks.into())).collect()
	}

	/// Turns the dial one click at a time.
	fn clicked(rotations: &[(Direction, u64)]) -> (u64, u64) {
		let (mut position, mut zeros) = (DIAL_START as i64, 0);
		for &(direction, clicks) in rotations {
			let step = match direction { Direction::Left => -1, Direction::Right => 1 };
			for _ in 0..clicks {
				position = (position + step).rem_euclid(DIAL_SIZE as i64);
				if position == 0 { zeros += 1 }
			}
		}
		(position as u64, zeros)
	}

	proptest! {
		#[test]
		fn position_stays_on_dial(rotations in rotations()) {
			prop_assert!(part1_impl(built(&rotations)) < DIAL_SIZE);
		}

		#[test]
		fn clicks_match_one_at_a_time(rotations in rotations()) {
			let (clicks, position) = part2_clicks_impl(built(&rotations));
			let (expected_position, expected_clicks) = clicked(&rotations);
			prop_assert_eq!((position, clicks), (expected_position, BigUint::from(expected_clicks)));
		}

		#[test]
		fn clicks_include_landings(rotations in rotations()) {
			let Tally { landings, clicks, .. } = tally(built(&rotations));
			prop_assert!(clicks >= BigUint::from(landings));
		}

		#[test]
		fn right_then_left_returns(start in 0..DIAL_SIZE, clicks in any::<u128>()) {
			let dial = Dial(start);
			let there = dial.rotated(&Rotation::new(Direction::Right, clicks.into()));
			prop_assert!(there.0 < DIAL_SIZE);
			prop_assert_eq!(there.rotated(&Rotation::new(Direction::Left, clicks.into())), dial);
		}

		#[test]
		fn full_turns_click_once_each(start in 0..DIAL_SIZE, turns in any::<u64>(), left in any::<bool>()) {
			let rotation = Rotation::new(direction(left), BigUint::from(turns) * DIAL_SIZE);
			prop_assert_eq!(Dial(start).rotated(&rotation), Dial(start));
			prop_assert_eq!(Dial(start).zero_clicks(&rotation), BigUint::from(turns));
		}

		#[test]
		fn comments_do_not_count(rotations in rotations()) {
			let rotations = built(&rotations);
			let input = rotations.iter()
				.map(|rotation| format!("{rotation}\n# after {rotation}\n"))
				.join("\n");
			prop_assert_eq!(tally(input_rotations_from_str(&input)), tally(rotations));
		}
	}
}
