#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure parsing system for controller transmissions.
//!
//! The dispatch adapter hands a raw line of radio phraseology to
//! [`parse_transmission`], which lowers it, splits it into tokens, and groups
//! those tokens into a callsign plus instruction runs keyed by alias. After
//! the validation system has accepted a run, [`altitude_args`] and
//! [`heading_args`] convert its tokens into typed payloads. Every function
//! here is stateless; failures are returned as [`ParseError`] values whose
//! rendered messages are surfaced to the controller verbatim.

use radar_contact_core::{
    is_expedite_keyword, number_from_string, AltitudeInstruction, Arg, HeadingInstruction,
    InstructionKind, TurnDirection,
};
use thiserror::Error;

/// Reasons a transmission or an argument list fails to parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The transmission contained no tokens at all.
    #[error("Invalid transmission. Expected a callsign followed by at least one instruction")]
    EmptyTransmission,
    /// A token arrived before any instruction alias could claim it.
    #[error("Invalid instruction. \"{0}\" is not a recognized instruction")]
    UnrecognizedInstruction(String),
    /// The transmission named a callsign but carried no instructions.
    #[error("Invalid transmission. Expected at least one instruction after the callsign")]
    EmptyClearance,
    /// The altitude value did not convert to a number.
    #[error("Invalid argument. Altitude must be a number")]
    AltitudeNotANumber,
    /// The argument list does not fit the shape validation guarantees.
    #[error("Invalid argument. Argument list does not fit the instruction")]
    MalformedArguments,
}

/// Single instruction alias plus the argument tokens that followed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionRun {
    /// Instruction family selected by the alias token.
    pub kind: InstructionKind,
    /// Argument tokens attached to the run, in transmission order.
    pub args: Vec<Arg>,
}

impl InstructionRun {
    /// Creates a run for the provided family and arguments.
    #[must_use]
    pub fn new(kind: InstructionKind, args: Vec<Arg>) -> Self {
        Self { kind, args }
    }
}

/// Parsed transmission: who it addresses and what it instructs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transmission {
    /// Callsign the transmission addresses, lowercased at the boundary.
    pub callsign: String,
    /// Instruction runs in the order they were spoken.
    pub instructions: Vec<InstructionRun>,
}

/// Splits a raw transmission into lowercase tokens.
///
/// Radio phraseology is case-insensitive, so the line is lowered once here
/// and every later stage matches tokens exactly. Splitting on whitespace
/// discards empty tokens; a blank transmission is rejected outright.
pub fn tokenize(raw: &str) -> Result<Vec<String>, ParseError> {
    let tokens: Vec<String> = raw
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect();

    if tokens.is_empty() {
        return Err(ParseError::EmptyTransmission);
    }

    Ok(tokens)
}

/// Groups tokens into a callsign plus instruction runs.
///
/// The first token is always the callsign, even when it happens to spell an
/// alias. Every later token that matches a known alias opens a new run;
/// anything else attaches to the current run as a word argument. A token
/// arriving before any alias has no run to attach to and is rejected.
pub fn segment(tokens: Vec<String>) -> Result<Transmission, ParseError> {
    let mut tokens = tokens.into_iter();
    let callsign = tokens.next().ok_or(ParseError::EmptyTransmission)?;

    let mut instructions: Vec<InstructionRun> = Vec::new();
    for token in tokens {
        if let Some(kind) = InstructionKind::from_alias(&token) {
            instructions.push(InstructionRun::new(kind, Vec::new()));
        } else if let Some(run) = instructions.last_mut() {
            run.args.push(Arg::word(token));
        } else {
            return Err(ParseError::UnrecognizedInstruction(token));
        }
    }

    if instructions.is_empty() {
        return Err(ParseError::EmptyClearance);
    }

    Ok(Transmission {
        callsign,
        instructions,
    })
}

/// Tokenizes and segments a raw transmission in one step.
pub fn parse_transmission(raw: &str) -> Result<Transmission, ParseError> {
    segment(tokenize(raw)?)
}

/// Builds the typed altitude payload from a validated argument list.
///
/// The entered value is expressed in hundreds of feet, so `180` assigns
/// 18000. Its numeric conversion happens here rather than in the validator;
/// a value that fails it reports [`ParseError::AltitudeNotANumber`].
pub fn altitude_args(args: &[Arg]) -> Result<AltitudeInstruction, ParseError> {
    let (value, expedite) = match args {
        [value] => (value, false),
        [value, modifier] => {
            if !modifier.as_word().map_or(false, is_expedite_keyword) {
                return Err(ParseError::MalformedArguments);
            }
            (value, true)
        }
        _ => return Err(ParseError::MalformedArguments),
    };

    let hundreds = value
        .as_word()
        .and_then(number_from_string)
        .ok_or(ParseError::AltitudeNotANumber)?;

    Ok(AltitudeInstruction::new(hundreds * 100.0, expedite))
}

/// Builds the typed heading payload from a validated argument list.
///
/// One argument assigns an absolute heading. Two or three arguments name a
/// turn direction and a value, with the optional boolean flag marking the
/// turn as incremental. Validation has already vetted every token here, so
/// any mismatch reports [`ParseError::MalformedArguments`] instead of a
/// user-facing type error.
pub fn heading_args(args: &[Arg]) -> Result<HeadingInstruction, ParseError> {
    match args {
        [value] => Ok(HeadingInstruction::new(None, heading_number(value)?, false)),
        [direction, value] => {
            let direction = turn_direction(direction)?;
            let degrees = heading_number(value)?;
            Ok(HeadingInstruction::new(Some(direction), degrees, false))
        }
        [direction, value, flag] => {
            let direction = turn_direction(direction)?;
            let degrees = heading_number(value)?;
            let incremental = flag.as_flag().ok_or(ParseError::MalformedArguments)?;
            Ok(HeadingInstruction::new(
                Some(direction),
                degrees,
                incremental,
            ))
        }
        _ => Err(ParseError::MalformedArguments),
    }
}

fn turn_direction(arg: &Arg) -> Result<TurnDirection, ParseError> {
    arg.as_word()
        .and_then(TurnDirection::from_token)
        .ok_or(ParseError::MalformedArguments)
}

fn heading_number(arg: &Arg) -> Result<f64, ParseError> {
    arg.as_word()
        .and_then(number_from_string)
        .ok_or(ParseError::MalformedArguments)
}
