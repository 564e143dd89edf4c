#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the radar-contact command layer.
//!
//! This crate defines the vocabulary that connects the parsing and validation
//! systems with the dispatch adapter: the argument token model carried by
//! every instruction, the instruction families and their radio shorthand
//! aliases, the closed keyword sets consulted during validation, and the
//! tagged rejection values whose rendered messages are the contract surfaced
//! to the controller verbatim.

use std::{error::Error, fmt};

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the scope comes online.
pub const SCOPE_BANNER: &str = "Radar contact. You have the scope.";

/// Literal tokens accepted as the expedite modifier on an altitude instruction.
pub const EXPEDITE_KEYWORDS: [&str; 2] = ["expedite", "x"];

const INVALID_ARGUMENT: &str = "Invalid argument";
const INVALID_ARGUMENT_LENGTH: &str = "Invalid argument length";

/// Reports whether the token is an exact member of the expedite whitelist.
#[must_use]
pub fn is_expedite_keyword(token: &str) -> bool {
    EXPEDITE_KEYWORDS.contains(&token)
}

/// Single token supplied as an argument to an instruction.
///
/// Transmissions produce text words exclusively; boolean flags exist for
/// programmatic callers and appear in at most one position (the third
/// argument of a heading instruction). A controller typing `true` produces
/// the word `"true"`, never a flag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arg {
    /// Text word captured from the transmission.
    Word(String),
    /// Genuine boolean flag supplied by a programmatic caller.
    Flag(bool),
}

impl Arg {
    /// Creates a word argument from the provided token text.
    #[must_use]
    pub fn word(token: impl Into<String>) -> Self {
        Self::Word(token.into())
    }

    /// Creates a boolean flag argument.
    #[must_use]
    pub const fn flag(value: bool) -> Self {
        Self::Flag(value)
    }

    /// Returns the token text when the argument is a word.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(token) => Some(token),
            Self::Flag(_) => None,
        }
    }

    /// Returns the boolean value when the argument is a flag.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            Self::Word(_) => None,
        }
    }

    /// Reports whether the argument is a genuine boolean flag.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self, Self::Flag(_))
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(token) => write!(f, "{token}"),
            Self::Flag(value) => write!(f, "{value}"),
        }
    }
}

/// Reasons an instruction's argument list fails validation.
///
/// The rendered `Display` text of each variant is the user-facing contract:
/// rejection messages are shown to the controller verbatim and must stay
/// byte-identical to the messages the scope has always produced. Exactly one
/// variant is returned per invalid condition; the first applicable failure
/// wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationError {
    /// The instruction accepts no arguments but some were supplied.
    ExpectedZeroArguments,
    /// The instruction requires exactly one argument.
    ExpectedSingleArgument,
    /// The instruction accepts at most one argument.
    ExpectedZeroOrOneArgument,
    /// The instruction requires one or two arguments.
    ExpectedOneOrTwoArguments,
    /// The instruction requires between one and three arguments.
    ExpectedOneToThreeArguments,
    /// The altitude modifier was not a recognized expedite keyword.
    InvalidExpediteKeyword,
    /// The heading value did not convert to a number.
    HeadingNotANumber,
    /// The turn direction was not one of the recognized direction strings.
    ///
    /// The message text mentions three arguments even when only two were
    /// supplied; the two-argument branch reuses it verbatim by design.
    InvalidTurnDirection,
    /// The incremental-turn marker was not a genuine boolean flag.
    IncrementalFlagNotBoolean,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedZeroArguments => {
                write!(
                    f,
                    "{INVALID_ARGUMENT_LENGTH}. Expected exactly zero arguments"
                )
            }
            Self::ExpectedSingleArgument => {
                write!(
                    f,
                    "{INVALID_ARGUMENT_LENGTH}. Expected exactly one argument"
                )
            }
            Self::ExpectedZeroOrOneArgument => {
                write!(f, "{INVALID_ARGUMENT_LENGTH}. Expected zero or one argument")
            }
            Self::ExpectedOneOrTwoArguments => {
                write!(f, "{INVALID_ARGUMENT_LENGTH}. Expected one or two arguments")
            }
            Self::ExpectedOneToThreeArguments => {
                write!(
                    f,
                    "{INVALID_ARGUMENT_LENGTH}. Expected one, two, or three arguments"
                )
            }
            Self::InvalidExpediteKeyword => {
                write!(
                    f,
                    "{INVALID_ARGUMENT}. Altitude accepts only \"expedite\" or \"x\" as a second argument"
                )
            }
            Self::HeadingNotANumber => {
                write!(f, "{INVALID_ARGUMENT}. Heading must be a number")
            }
            Self::InvalidTurnDirection => {
                write!(
                    f,
                    "{INVALID_ARGUMENT}. Expected one of 'left / l / right / r' as the first argument when passed three arguments"
                )
            }
            Self::IncrementalFlagNotBoolean => {
                write!(
                    f,
                    "{INVALID_ARGUMENT}. Heading accepts a boolean for the third argument when passed three arguments"
                )
            }
        }
    }
}

impl Error for ValidationError {}

/// Direction of a commanded turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    /// Turn through decreasing compass headings.
    Left,
    /// Turn through increasing compass headings.
    Right,
}

impl TurnDirection {
    /// Recognizes the four direction tokens accepted in a heading instruction.
    ///
    /// Matching is case-sensitive and exact; anything outside
    /// `left` / `l` / `right` / `r` is unrecognized.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "left" | "l" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Families of ATC instructions the command layer understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionKind {
    /// Clears the aircraft for takeoff.
    Takeoff,
    /// Cancels the aircraft's current action.
    Abort,
    /// Assigns an airspeed.
    Speed,
    /// Assigns a transponder code.
    Squawk,
    /// Sends the aircraft to a runway queue.
    Taxi,
    /// Assigns an altitude, optionally expedited.
    Altitude,
    /// Assigns an absolute heading or an incremental turn.
    Heading,
}

impl InstructionKind {
    /// Every instruction family known to the dispatch layer.
    pub const ALL: [Self; 7] = [
        Self::Takeoff,
        Self::Abort,
        Self::Speed,
        Self::Squawk,
        Self::Taxi,
        Self::Altitude,
        Self::Heading,
    ];

    /// Radio shorthand aliases that select this instruction family.
    ///
    /// Aliases are unique across families and never collide with argument
    /// tokens such as direction strings or expedite keywords, so the
    /// tokenizer can segment a transmission by alias lookup alone.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Takeoff => &["takeoff", "to", "cto"],
            Self::Abort => &["abort"],
            Self::Speed => &["speed", "sp", "slow"],
            Self::Squawk => &["squawk", "sq"],
            Self::Taxi => &["taxi", "wait", "w"],
            Self::Altitude => &["altitude", "a", "c", "climb", "d", "descend"],
            Self::Heading => &["heading", "h", "fh", "t", "turn"],
        }
    }

    /// Resolves an alias token to its instruction family.
    #[must_use]
    pub fn from_alias(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.aliases().contains(&token))
    }

    /// Canonical lowercase name used when reading an instruction back.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Takeoff => "takeoff",
            Self::Abort => "abort",
            Self::Speed => "speed",
            Self::Squawk => "squawk",
            Self::Taxi => "taxi",
            Self::Altitude => "altitude",
            Self::Heading => "heading",
        }
    }
}

/// Converts a token into the numeric value it spells, when it spells one.
///
/// Coercion rules are owned by this helper: the token is trimmed, must parse
/// as a finite `f64`, and blank input is not a number. Leading zeros are
/// accepted, so the conventional three-digit heading `042` reads as `42`.
#[must_use]
pub fn number_from_string(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Altitude assignment produced from a validated altitude instruction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AltitudeInstruction {
    feet: f64,
    expedite: bool,
}

impl AltitudeInstruction {
    /// Creates a new altitude assignment.
    #[must_use]
    pub const fn new(feet: f64, expedite: bool) -> Self {
        Self { feet, expedite }
    }

    /// Assigned altitude in feet above sea level.
    #[must_use]
    pub const fn feet(&self) -> f64 {
        self.feet
    }

    /// Whether the climb or descent should be expedited.
    #[must_use]
    pub const fn expedite(&self) -> bool {
        self.expedite
    }
}

/// Heading assignment produced from a validated heading instruction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadingInstruction {
    direction: Option<TurnDirection>,
    degrees: f64,
    incremental: bool,
}

impl HeadingInstruction {
    /// Creates a new heading assignment.
    #[must_use]
    pub const fn new(direction: Option<TurnDirection>, degrees: f64, incremental: bool) -> Self {
        Self {
            direction,
            degrees,
            incremental,
        }
    }

    /// Commanded turn direction, when one was specified.
    #[must_use]
    pub const fn direction(&self) -> Option<TurnDirection> {
        self.direction
    }

    /// Commanded value in magnetic degrees; an increment when
    /// [`Self::incremental`] is set.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Whether the value turns the aircraft by the given amount rather than
    /// onto an absolute heading.
    #[must_use]
    pub const fn incremental(&self) -> bool {
        self.incremental
    }
}
