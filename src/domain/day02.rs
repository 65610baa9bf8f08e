//! Cube game: colored dice drawn from a bag over several rounds.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Colors are told apart by their first letter only.
    fn from_word(word: &str) -> Result<Self, GameParseError> {
        match word.chars().next() {
            Some('r') => Ok(Color::Red),
            Some('g') => Ok(Color::Green),
            Some('b') => Ok(Color::Blue),
            _ => Err(GameParseError::UnknownColor(word.to_string())),
        }
    }

    fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameParseError {
    #[error("missing ':' between game id and rounds")]
    MissingColon,
    #[error("expected header 'Game <id>', got {0:?}")]
    BadHeader(String),
    #[error("expected a dice count, got {0:?}")]
    BadCount(String),
    #[error("unknown color {0:?}")]
    UnknownColor(String),
    #[error("count {0} has no color")]
    MissingColor(u16),
    #[error("color {color} appears twice in round {round}")]
    DuplicateColor { color: Color, round: usize },
    #[error("separator without a following count")]
    DanglingSeparator,
    #[error("unexpected token {0:?} after the last round")]
    TrailingToken(String),
}

/// Dice per color. Used for one round, for the running maxima of a game, and for bag limits.
/// Counts are `u16` so the product of all three always fits in a `u64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeCounts {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

pub type Round = CubeCounts;

impl CubeCounts {
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    pub fn get(&self, color: Color) -> u16 {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Blue => self.blue,
        }
    }

    fn set(&mut self, color: Color, count: u16) {
        match color {
            Color::Red => self.red = count,
            Color::Green => self.green = count,
            Color::Blue => self.blue = count,
        }
    }

    fn raise_to(&mut self, other: &CubeCounts) {
        for color in Color::ALL {
            if other.get(color) > self.get(color) {
                self.set(color, other.get(color));
            }
        }
    }

    pub fn fits_within(&self, limit: &BagLimit) -> bool {
        Color::ALL
            .iter()
            .all(|&color| self.get(color) <= limit.0.get(color))
    }

    pub fn power(&self) -> u64 {
        Color::ALL
            .iter()
            .map(|&color| u64::from(self.get(color)))
            .product()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagLimit(pub CubeCounts);

impl BagLimit {
    pub const STANDARD: BagLimit = BagLimit(CubeCounts::new(12, 13, 14));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: u32,
    rounds: Vec<Round>,
    max: CubeCounts,
}

#[derive(Debug, Default)]
struct RoundBuilder {
    counts: CubeCounts,
    seen: [bool; 3],
}

impl RoundBuilder {
    fn add(&mut self, color: Color, count: u16, round: usize) -> Result<(), GameParseError> {
        if self.seen[color.index()] {
            return Err(GameParseError::DuplicateColor { color, round });
        }
        self.seen[color.index()] = true;
        self.counts.set(color, count);
        Ok(())
    }
}

enum ParseState {
    ExpectCount { after_separator: bool },
    ExpectColor { count: u16 },
    EndOfLine,
}

impl Game {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            rounds: Vec::new(),
            max: CubeCounts::default(),
        }
    }

    pub fn add_round(&mut self, round: Round) {
        self.max.raise_to(&round);
        self.rounds.push(round);
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Per-color maximum over all rounds, i.e. the fewest dice the bag could have held.
    pub fn max_counts(&self) -> CubeCounts {
        self.max
    }

    pub fn is_possible(&self, limit: &BagLimit) -> bool {
        self.rounds.iter().all(|round| round.fits_within(limit))
    }

    pub fn power(&self) -> u64 {
        self.max.power()
    }

    pub fn parse(line: &str) -> Result<Self, GameParseError> {
        let (header, body) = line.split_once(':').ok_or(GameParseError::MissingColon)?;
        let id = header
            .trim()
            .strip_prefix("Game")
            .and_then(|id| id.trim().parse().ok())
            .ok_or_else(|| GameParseError::BadHeader(header.to_string()))?;

        let mut game = Game::new(id);
        let mut round = RoundBuilder::default();
        let mut state = ParseState::ExpectCount {
            after_separator: false,
        };

        for token in body.split_whitespace() {
            state = match state {
                ParseState::ExpectCount { .. } => {
                    let count = token
                        .parse()
                        .map_err(|_| GameParseError::BadCount(token.to_string()))?;
                    ParseState::ExpectColor { count }
                }
                ParseState::ExpectColor { count } => {
                    let (word, separator) = match token.strip_suffix(&[',', ';'][..]) {
                        Some(word) => (word, token.chars().last()),
                        None => (token, None),
                    };
                    let color = Color::from_word(word)?;
                    round.add(color, count, game.rounds.len() + 1)?;

                    match separator {
                        Some(',') => ParseState::ExpectCount {
                            after_separator: true,
                        },
                        Some(_) => {
                            game.add_round(std::mem::take(&mut round).counts);
                            ParseState::ExpectCount {
                                after_separator: true,
                            }
                        }
                        None => {
                            game.add_round(std::mem::take(&mut round).counts);
                            ParseState::EndOfLine
                        }
                    }
                }
                ParseState::EndOfLine => {
                    return Err(GameParseError::TrailingToken(token.to_string()));
                }
            };
        }

        match state {
            ParseState::ExpectCount {
                after_separator: true,
            } => Err(GameParseError::DanglingSeparator),
            ParseState::ExpectColor { count } => Err(GameParseError::MissingColor(count)),
            ParseState::ExpectCount {
                after_separator: false,
            }
            | ParseState::EndOfLine => Ok(game),
        }
    }
}

pub fn sum_possible_game_ids<'a>(
    games: impl IntoIterator<Item = &'a Game>,
    limit: &BagLimit,
) -> u64 {
    games
        .into_iter()
        .filter(|game| game.is_possible(limit))
        .map(|game| u64::from(game.id()))
        .sum()
}

pub fn sum_of_powers<'a>(games: impl IntoIterator<Item = &'a Game>) -> u64 {
    games.into_iter().map(Game::power).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    static EXAMPLE: &str = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    fn example_games() -> anyhow::Result<Vec<Game>> {
        let games = EXAMPLE
            .lines()
            .map(Game::parse)
            .collect::<Result<_, _>>()?;
        Ok(games)
    }

    #[test]
    fn test_parse_first_game() {
        let game = Game::parse("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
        assert_eq!(game.id(), 1);
        assert_eq!(
            game.rounds(),
            &[
                CubeCounts::new(4, 0, 3),
                CubeCounts::new(1, 2, 6),
                CubeCounts::new(0, 2, 0)
            ]
        );
        assert_eq!(game.max_counts(), CubeCounts::new(4, 2, 6));
        assert!(game.is_possible(&BagLimit::STANDARD));
        assert_eq!(game.power(), 48);
    }

    #[test]
    fn test_example_part_one() -> anyhow::Result<()> {
        assert_eq!(sum_possible_game_ids(&example_games()?, &BagLimit::STANDARD), 8);
        Ok(())
    }

    #[test]
    fn test_example_part_two() -> anyhow::Result<()> {
        assert_eq!(sum_of_powers(&example_games()?), 2286);
        Ok(())
    }

    #[test]
    fn test_validity_against_custom_limit() {
        let game = Game::parse("Game 2: 1 blue, 2 green; 3 green, 4 blue, 5 red").unwrap();
        assert!(game.is_possible(&BagLimit::STANDARD));
        assert!(!game.is_possible(&BagLimit(CubeCounts::new(1, 13, 14))));
        assert!(game.is_possible(&BagLimit(CubeCounts::new(5, 3, 4))));
        assert!(!game.is_possible(&BagLimit(CubeCounts::new(5, 3, 3))));
    }

    #[test]
    fn test_limit_is_inclusive() {
        let game = Game::parse("Game 9: 12 red, 13 green, 14 blue").unwrap();
        assert!(game.is_possible(&BagLimit::STANDARD));
        let game = Game::parse("Game 9: 12 red, 13 green, 15 blue").unwrap();
        assert!(!game.is_possible(&BagLimit::STANDARD));
    }

    #[test]
    fn test_powers_are_summed_per_game() -> anyhow::Result<()> {
        let games = example_games()?;
        let powers: Vec<u64> = games.iter().map(Game::power).collect();
        assert_eq!(powers, vec![48, 12, 1560, 630, 36]);
        assert_eq!(sum_of_powers(&[] as &[Game]), 0);
        Ok(())
    }

    #[test]
    fn test_color_matched_by_first_letter() {
        let game = Game::parse("Game 3: 2 rouge, 1 grün; 7 bleu").unwrap();
        assert_eq!(game.max_counts(), CubeCounts::new(2, 1, 7));
    }

    #[test]
    fn test_empty_body_is_game_without_rounds() {
        let game = Game::parse("Game 4:").unwrap();
        assert!(game.rounds().is_empty());
        assert_eq!(game.power(), 0);
        assert!(game.is_possible(&BagLimit::STANDARD));
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(Game::parse("Game 1 3 blue"), Err(GameParseError::MissingColon));
        assert_eq!(
            Game::parse("Gaem 1: 3 blue"),
            Err(GameParseError::BadHeader("Gaem 1".to_string()))
        );
        assert_eq!(
            Game::parse("Game x: 3 blue"),
            Err(GameParseError::BadHeader("Game x".to_string()))
        );
        assert_eq!(
            Game::parse("Game 1: three blue"),
            Err(GameParseError::BadCount("three".to_string()))
        );
        assert_eq!(
            Game::parse("Game 1: 3 yellow"),
            Err(GameParseError::UnknownColor("yellow".to_string()))
        );
        assert_eq!(
            Game::parse("Game 1: 3 blue, 4"),
            Err(GameParseError::MissingColor(4))
        );
        assert_eq!(
            Game::parse("Game 1: 3 blue;"),
            Err(GameParseError::DanglingSeparator)
        );
        assert_eq!(
            Game::parse("Game 1: 3 blue 4 red"),
            Err(GameParseError::TrailingToken("4".to_string()))
        );
        assert_eq!(
            Game::parse("Game 1: 1 red; 3 blue, 4 blue"),
            Err(GameParseError::DuplicateColor {
                color: Color::Blue,
                round: 2
            })
        );
    }

    #[test]
    fn test_count_too_large_for_a_bag_is_rejected() {
        assert_eq!(
            Game::parse("Game 1: 4294967295 red, 4294967295 green, 4294967295 blue"),
            Err(GameParseError::BadCount("4294967295".to_string()))
        );
        assert_eq!(
            Game::parse("Game 1: 65536 red"),
            Err(GameParseError::BadCount("65536".to_string()))
        );
    }

    #[test]
    fn test_power_of_largest_counts_fits() -> anyhow::Result<()> {
        let game = Game::parse("Game 1: 65535 red, 65535 green, 65535 blue")?;
        assert_eq!(game.power(), 65535u64 * 65535 * 65535);
        assert_eq!(sum_of_powers(&[game.clone(), game]), 2 * 65535u64 * 65535 * 65535);
        Ok(())
    }

    #[test]
    fn test_colors_reset_between_rounds() {
        let game = Game::parse("Game 6: 3 blue; 4 blue; 1 red").unwrap();
        assert_eq!(game.rounds().len(), 3);
        assert_eq!(game.max_counts(), CubeCounts::new(1, 0, 4));
    }
}
