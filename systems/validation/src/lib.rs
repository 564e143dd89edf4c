#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure validation system for instruction argument lists.
//!
//! Every validator is a stateless function over an optional argument slice:
//! `None` stands for a call that supplied no argument list at all and counts
//! as length zero. Success returns `Ok(())`; failure returns exactly one
//! [`ValidationError`], chosen by the first applicable check in a fixed
//! order. Nothing here panics, logs, or mutates; rejection messages reach
//! the controller through the error's rendered text alone.

use radar_contact_core::{
    is_expedite_keyword, number_from_string, Arg, InstructionKind, TurnDirection, ValidationError,
};

/// Checks that the argument list is empty.
pub fn zero_arguments_validator(args: Option<&[Arg]>) -> Result<(), ValidationError> {
    let args = args.unwrap_or_default();

    if !args.is_empty() {
        return Err(ValidationError::ExpectedZeroArguments);
    }

    Ok(())
}

/// Checks that the argument list holds exactly one value.
pub fn single_argument_validator(args: Option<&[Arg]>) -> Result<(), ValidationError> {
    let args = args.unwrap_or_default();

    if args.len() != 1 {
        return Err(ValidationError::ExpectedSingleArgument);
    }

    Ok(())
}

/// Checks that the argument list holds at most one value.
///
/// An absent list counts as length zero and is therefore valid.
pub fn zero_or_one_argument_validator(args: Option<&[Arg]>) -> Result<(), ValidationError> {
    let args = args.unwrap_or_default();

    if args.len() > 1 {
        return Err(ValidationError::ExpectedZeroOrOneArgument);
    }

    Ok(())
}

/// Checks that the argument list holds one or two values.
///
/// An absent list counts as length zero, which sits outside the accepted
/// range and is rejected. That asymmetry with
/// [`zero_or_one_argument_validator`] is long-standing observed behaviour
/// and is preserved deliberately.
pub fn one_or_two_argument_validator(args: Option<&[Arg]>) -> Result<(), ValidationError> {
    let args = args.unwrap_or_default();

    if args.is_empty() || args.len() > 2 {
        return Err(ValidationError::ExpectedOneOrTwoArguments);
    }

    Ok(())
}

/// Checks that the argument list holds one, two, or three values.
pub fn one_to_three_arguments_validator(args: Option<&[Arg]>) -> Result<(), ValidationError> {
    let args = args.unwrap_or_default();

    if args.is_empty() || args.len() > 3 {
        return Err(ValidationError::ExpectedOneToThreeArguments);
    }

    Ok(())
}

/// Checks argument count and expedite usage for an altitude instruction.
///
/// Arity failures from the inner length check propagate unchanged. With two
/// arguments the second must be an exact member of the expedite whitelist.
/// The numeric validity of the altitude value itself is deliberately not
/// checked here; the parsing stage owns that conversion.
pub fn altitude_validator(args: Option<&[Arg]>) -> Result<(), ValidationError> {
    one_or_two_argument_validator(args)?;

    let args = args.unwrap_or_default();
    if args.len() == 2 && !is_expedite_argument(&args[1]) {
        return Err(ValidationError::InvalidExpediteKeyword);
    }

    Ok(())
}

/// Checks argument count and per-position types for a heading instruction.
///
/// Arity failures from the inner length check propagate unchanged. The
/// remaining checks run in a fixed order (direction string, then numeric
/// heading, then boolean incremental marker) and stop at the first failure.
/// The two-argument branch reuses the three-argument direction message
/// verbatim; see [`ValidationError::InvalidTurnDirection`].
pub fn heading_validator(args: Option<&[Arg]>) -> Result<(), ValidationError> {
    one_to_three_arguments_validator(args)?;

    let args = args.unwrap_or_default();
    match args.len() {
        1 => require_heading_number(&args[0])?,
        2 => {
            require_turn_direction(&args[0])?;
            require_heading_number(&args[1])?;
        }
        3 => {
            require_turn_direction(&args[0])?;
            require_heading_number(&args[1])?;
            require_incremental_flag(&args[2])?;
        }
        _ => {}
    }

    Ok(())
}

/// Validates an argument list against the validator bound to the family.
pub fn validate(kind: InstructionKind, args: Option<&[Arg]>) -> Result<(), ValidationError> {
    match kind {
        InstructionKind::Takeoff | InstructionKind::Abort => zero_arguments_validator(args),
        InstructionKind::Speed | InstructionKind::Squawk => single_argument_validator(args),
        InstructionKind::Taxi => zero_or_one_argument_validator(args),
        InstructionKind::Altitude => altitude_validator(args),
        InstructionKind::Heading => heading_validator(args),
    }
}

fn is_expedite_argument(arg: &Arg) -> bool {
    arg.as_word().map_or(false, is_expedite_keyword)
}

fn require_turn_direction(arg: &Arg) -> Result<(), ValidationError> {
    if arg.as_word().and_then(TurnDirection::from_token).is_none() {
        return Err(ValidationError::InvalidTurnDirection);
    }

    Ok(())
}

fn require_heading_number(arg: &Arg) -> Result<(), ValidationError> {
    if arg.as_word().and_then(number_from_string).is_none() {
        return Err(ValidationError::HeadingNotANumber);
    }

    Ok(())
}

fn require_incremental_flag(arg: &Arg) -> Result<(), ValidationError> {
    if !arg.is_flag() {
        return Err(ValidationError::IncrementalFlagNotBoolean);
    }

    Ok(())
}
