//! Transmission dispatch: parse, gate against the roster, validate, and read
//! back what the scope accepted.

use radar_contact_core::{AltitudeInstruction, HeadingInstruction, InstructionKind};
use radar_contact_system_parsing::{self as parsing, InstructionRun, ParseError};
use radar_contact_system_validation as validation;

use crate::roster::Roster;

/// Runs one transmission through the parse, roster, validation, and readback
/// stages.
///
/// `Ok` carries one readback line per instruction. `Err` carries the
/// rejection message exactly as it must reach the controller; the first
/// failing stage wins and nothing from the transmission executes.
pub(crate) fn respond(raw: &str, roster: Option<&Roster>) -> Result<Vec<String>, String> {
    let transmission = parsing::parse_transmission(raw).map_err(|error| error.to_string())?;

    if let Some(roster) = roster {
        if !roster.contains(&transmission.callsign) {
            return Err(format!(
                "no such aircraft on frequency: {}",
                transmission.callsign
            ));
        }
    }

    for run in &transmission.instructions {
        validation::validate(run.kind, Some(run.args.as_slice()))
            .map_err(|error| error.to_string())?;
    }

    let mut readbacks = Vec::with_capacity(transmission.instructions.len());
    for run in &transmission.instructions {
        let line = readback(&transmission.callsign, run).map_err(|error| error.to_string())?;
        readbacks.push(line);
    }

    Ok(readbacks)
}

fn readback(callsign: &str, run: &InstructionRun) -> Result<String, ParseError> {
    let phrase = match run.kind {
        InstructionKind::Altitude => altitude_phrase(&parsing::altitude_args(&run.args)?),
        InstructionKind::Heading => heading_phrase(&parsing::heading_args(&run.args)?),
        _ => generic_phrase(run),
    };

    Ok(format!("roger, {callsign}, {phrase}"))
}

fn altitude_phrase(instruction: &AltitudeInstruction) -> String {
    let feet = format_value(instruction.feet());
    if instruction.expedite() {
        format!("maintain {feet}, expedite")
    } else {
        format!("maintain {feet}")
    }
}

fn heading_phrase(instruction: &HeadingInstruction) -> String {
    match instruction.direction() {
        None => format!("fly heading {}", format_heading(instruction.degrees())),
        Some(direction) if instruction.incremental() => {
            format!(
                "turn {direction} {} degrees",
                format_value(instruction.degrees())
            )
        }
        Some(direction) => {
            format!(
                "turn {direction} heading {}",
                format_heading(instruction.degrees())
            )
        }
    }
}

fn generic_phrase(run: &InstructionRun) -> String {
    let mut phrase = run.kind.name().to_owned();
    for arg in &run.args {
        phrase.push(' ');
        phrase.push_str(&arg.to_string());
    }
    phrase
}

/// Formats a heading readback with the conventional three digits.
fn format_heading(degrees: f64) -> String {
    if degrees.fract() == 0.0 {
        format!("{:03}", degrees as i64)
    } else {
        degrees.to_string()
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}
