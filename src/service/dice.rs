//! Dice expressions of the form `NdM`, `NdM+K` and `NdM-K`.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::AppError;

static DICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)d(\d+)([+-]\d+)?$").expect("dice pattern is valid"));

pub const MAX_DICE: u32 = 100;
pub const MIN_FACES: u32 = 2;
pub const MAX_FACES: u32 = 1000;

const FORMAT_HELP: &str = "Invalid format. Use **NdM** or **NdM+K** (for example `1d6`, `1d6+2`, `2d20-5`).\n\
N is the number of dice, M the number of faces and +K an optional modifier.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpression {
    pub count: u32,
    pub faces: u32,
    pub modifier: i64,
}

/// Outcome of rolling a `DiceExpression`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    pub rolls: Vec<u32>,
    pub modifier: i64,
}

impl DiceExpression {
    /// Parses an expression, case-insensitive and ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let input = input.trim().to_lowercase();
        let captures = DICE_PATTERN
            .captures(&input)
            .ok_or_else(|| AppError::BadRequest(FORMAT_HELP.to_string()))?;

        let count = captures[1]
            .parse::<u32>()
            .ok()
            .filter(|count| (1..=MAX_DICE).contains(count))
            .ok_or_else(|| {
                AppError::BadRequest(format!("The number of dice must be between 1 and {MAX_DICE}."))
            })?;

        let faces = captures[2]
            .parse::<u32>()
            .ok()
            .filter(|faces| (MIN_FACES..=MAX_FACES).contains(faces))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "The number of faces must be between {MIN_FACES} and {MAX_FACES}."
                ))
            })?;

        let modifier = match captures.get(3) {
            Some(modifier) => modifier
                .as_str()
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest("The modifier is too large.".to_string()))?,
            None => 0,
        };

        Ok(Self {
            count,
            faces,
            modifier,
        })
    }

    pub fn roll<R: Rng>(&self, rng: &mut R) -> DiceRoll {
        DiceRoll {
            rolls: (0..self.count)
                .map(|_| rng.random_range(1..=self.faces))
                .collect(),
            modifier: self.modifier,
        }
    }
}

impl DiceRoll {
    pub fn sum(&self) -> i64 {
        self.rolls.iter().map(|&roll| i64::from(roll)).sum()
    }

    pub fn total(&self) -> i64 {
        self.sum().saturating_add(self.modifier)
    }

    /// Markdown rendering: `**r**` for one die, `(r1 + r2) = **sum**` for several,
    /// followed by ` +K = **total**` when a modifier is present.
    pub fn render(&self) -> String {
        let mut text = match self.rolls.as_slice() {
            [single] => format!("**{single}**"),
            rolls => format!(
                "({}) = **{}**",
                rolls
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(" + "),
                self.sum()
            ),
        };

        if self.modifier != 0 {
            text.push_str(&format!(" {:+} = **{}**", self.modifier, self.total()));
        }

        text
    }
}
