use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use rand::Rng;

pub const PICK_COUNT: usize = 6;
pub const NUMBER_RANGE: RangeInclusive<u8> = 1..=45;

/// Draw six distinct lottery numbers in `1..=45`.
pub fn generate_numbers() -> BTreeSet<u8> {
    generate_numbers_with(&mut rand::rng())
}

/// Draw with a caller supplied generator, e.g. a seeded one.
pub fn generate_numbers_with<R: Rng + ?Sized>(rng: &mut R) -> BTreeSet<u8> {
    let mut numbers = BTreeSet::new();
    while numbers.len() < PICK_COUNT {
        numbers.insert(rng.random_range(NUMBER_RANGE));
    }
    numbers
}

/// Colour band of a drawn number, by decade.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Band {
    Yellow,
    Blue,
    Red,
    Gray,
    Green,
}

impl Band {
    pub fn of(number: u8) -> Self {
        match number {
            0..=10 => Self::Yellow,
            11..=20 => Self::Blue,
            21..=30 => Self::Red,
            31..=40 => Self::Gray,
            _ => Self::Green,
        }
    }
}
