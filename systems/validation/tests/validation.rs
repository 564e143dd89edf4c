use radar_contact_core::{Arg, InstructionKind, ValidationError};
use radar_contact_system_validation::{
    altitude_validator, heading_validator, one_or_two_argument_validator,
    one_to_three_arguments_validator, single_argument_validator, validate,
    zero_arguments_validator, zero_or_one_argument_validator,
};

fn words(tokens: &[&str]) -> Vec<Arg> {
    tokens.iter().map(|token| Arg::word(*token)).collect()
}

#[test]
fn zero_arguments_accepts_empty_and_absent_lists() {
    assert_eq!(zero_arguments_validator(Some(&[])), Ok(()));
    assert_eq!(zero_arguments_validator(None), Ok(()));
}

#[test]
fn zero_arguments_rejects_populated_lists() {
    let args = words(&["", ""]);
    assert_eq!(
        zero_arguments_validator(Some(args.as_slice())),
        Err(ValidationError::ExpectedZeroArguments),
    );
}

#[test]
fn single_argument_accepts_exactly_one_value() {
    let args = words(&["250"]);
    assert_eq!(single_argument_validator(Some(args.as_slice())), Ok(()));
}

#[test]
fn single_argument_rejects_every_other_length() {
    let two = words(&["", ""]);
    assert_eq!(
        single_argument_validator(Some(two.as_slice())),
        Err(ValidationError::ExpectedSingleArgument),
    );
    assert_eq!(
        single_argument_validator(Some(&[])),
        Err(ValidationError::ExpectedSingleArgument),
    );
    assert_eq!(
        single_argument_validator(None),
        Err(ValidationError::ExpectedSingleArgument),
    );
}

#[test]
fn zero_or_one_argument_accepts_an_absent_list() {
    assert_eq!(zero_or_one_argument_validator(None), Ok(()));

    let one = words(&["27r"]);
    assert_eq!(zero_or_one_argument_validator(Some(one.as_slice())), Ok(()));
}

#[test]
fn zero_or_one_argument_rejects_two_values() {
    let args = words(&["", ""]);
    assert_eq!(
        zero_or_one_argument_validator(Some(args.as_slice())),
        Err(ValidationError::ExpectedZeroOrOneArgument),
    );
}

#[test]
fn one_or_two_arguments_accept_one_and_two_values() {
    let one = words(&["180"]);
    assert_eq!(one_or_two_argument_validator(Some(one.as_slice())), Ok(()));

    let two = words(&["180", "expedite"]);
    assert_eq!(one_or_two_argument_validator(Some(two.as_slice())), Ok(()));
}

#[test]
fn one_or_two_arguments_reject_an_absent_list() {
    // Length zero is outside the accepted range, unlike the zero-or-one
    // validator's treatment of the same call.
    assert_eq!(
        one_or_two_argument_validator(None),
        Err(ValidationError::ExpectedOneOrTwoArguments),
    );

    let three = words(&["", "", ""]);
    assert_eq!(
        one_or_two_argument_validator(Some(three.as_slice())),
        Err(ValidationError::ExpectedOneOrTwoArguments),
    );
}

#[test]
fn one_to_three_arguments_accept_the_whole_range() {
    for length in 1..=3 {
        let args = vec![Arg::word("042"); length];
        assert_eq!(
            one_to_three_arguments_validator(Some(args.as_slice())),
            Ok(()),
            "length {length} sits inside the accepted range",
        );
    }
}

#[test]
fn one_to_three_arguments_reject_empty_and_oversized_lists() {
    assert_eq!(
        one_to_three_arguments_validator(Some(&[])),
        Err(ValidationError::ExpectedOneToThreeArguments),
    );
    assert_eq!(
        one_to_three_arguments_validator(None),
        Err(ValidationError::ExpectedOneToThreeArguments),
    );

    let four = words(&["", "", "", ""]);
    assert_eq!(
        one_to_three_arguments_validator(Some(four.as_slice())),
        Err(ValidationError::ExpectedOneToThreeArguments),
    );
}

#[test]
fn altitude_accepts_a_single_value_without_checking_it() {
    // The numeric conversion of the altitude itself belongs to the parsing
    // stage, so even a non-numeric word passes here.
    let numeric = words(&["180"]);
    assert_eq!(altitude_validator(Some(numeric.as_slice())), Ok(()));

    let word = words(&["threeve"]);
    assert_eq!(altitude_validator(Some(word.as_slice())), Ok(()));
}

#[test]
fn altitude_accepts_both_expedite_keywords() {
    let long_form = words(&["180", "expedite"]);
    assert_eq!(altitude_validator(Some(long_form.as_slice())), Ok(()));

    let short_form = words(&["180", "x"]);
    assert_eq!(altitude_validator(Some(short_form.as_slice())), Ok(()));
}

#[test]
fn altitude_rejects_second_arguments_outside_the_whitelist() {
    let args = words(&["180", "fast"]);
    assert_eq!(
        altitude_validator(Some(args.as_slice())),
        Err(ValidationError::InvalidExpediteKeyword),
    );

    let blank = words(&["", ""]);
    assert_eq!(
        altitude_validator(Some(blank.as_slice())),
        Err(ValidationError::InvalidExpediteKeyword),
    );
}

#[test]
fn altitude_propagates_arity_failures_unchanged() {
    assert_eq!(
        altitude_validator(Some(&[])),
        Err(ValidationError::ExpectedOneOrTwoArguments),
    );

    let three = words(&["", "", ""]);
    assert_eq!(
        altitude_validator(Some(three.as_slice())),
        Err(ValidationError::ExpectedOneOrTwoArguments),
    );
}

#[test]
fn heading_accepts_each_valid_shape() {
    let absolute = words(&["042"]);
    assert_eq!(heading_validator(Some(absolute.as_slice())), Ok(()));

    let directed = words(&["l", "42"]);
    assert_eq!(heading_validator(Some(directed.as_slice())), Ok(()));

    let incremental = vec![Arg::word("l"), Arg::word("42"), Arg::flag(true)];
    assert_eq!(heading_validator(Some(incremental.as_slice())), Ok(()));
}

#[test]
fn heading_propagates_arity_failures_unchanged() {
    assert_eq!(
        heading_validator(Some(&[])),
        Err(ValidationError::ExpectedOneToThreeArguments),
    );
    assert_eq!(
        heading_validator(None),
        Err(ValidationError::ExpectedOneToThreeArguments),
    );

    let four = words(&["", "", "", ""]);
    assert_eq!(
        heading_validator(Some(four.as_slice())),
        Err(ValidationError::ExpectedOneToThreeArguments),
    );
}

#[test]
fn heading_rejects_the_wrong_argument_types_per_position() {
    let sole_word = words(&["threeve"]);
    assert_eq!(
        heading_validator(Some(sole_word.as_slice())),
        Err(ValidationError::HeadingNotANumber),
    );

    let numeric_direction = words(&["42", "42"]);
    assert_eq!(
        heading_validator(Some(numeric_direction.as_slice())),
        Err(ValidationError::InvalidTurnDirection),
    );

    let bad_value = words(&["l", "threeve"]);
    assert_eq!(
        heading_validator(Some(bad_value.as_slice())),
        Err(ValidationError::HeadingNotANumber),
    );

    let three_with_bad_direction = vec![Arg::word("42"), Arg::word("42"), Arg::flag(true)];
    assert_eq!(
        heading_validator(Some(three_with_bad_direction.as_slice())),
        Err(ValidationError::InvalidTurnDirection),
    );

    let three_with_bad_value = vec![Arg::word("l"), Arg::word("threeve"), Arg::flag(true)];
    assert_eq!(
        heading_validator(Some(three_with_bad_value.as_slice())),
        Err(ValidationError::HeadingNotANumber),
    );

    let word_instead_of_flag = words(&["l", "42", "threeve"]);
    assert_eq!(
        heading_validator(Some(word_instead_of_flag.as_slice())),
        Err(ValidationError::IncrementalFlagNotBoolean),
    );
}

#[test]
fn heading_checks_stop_at_the_first_failure() {
    // Every position is wrong here; the direction check runs first and wins.
    let args = words(&["x", "threeve", "y"]);
    assert_eq!(
        heading_validator(Some(args.as_slice())),
        Err(ValidationError::InvalidTurnDirection),
    );
}

#[test]
fn heading_direction_matching_is_case_sensitive() {
    let args = words(&["L", "042"]);
    assert_eq!(
        heading_validator(Some(args.as_slice())),
        Err(ValidationError::InvalidTurnDirection),
    );
}

#[test]
fn two_argument_direction_failures_reuse_the_three_argument_message() {
    let args = words(&["x", "042"]);
    let error = heading_validator(Some(args.as_slice()))
        .expect_err("an unrecognized direction must be rejected");

    assert_eq!(
        error.to_string(),
        "Invalid argument. Expected one of 'left / l / right / r' as the first argument when passed three arguments",
        "the two-argument branch reads back the three-argument text verbatim",
    );
}

#[test]
fn arity_failures_render_the_legacy_messages() {
    let error =
        one_or_two_argument_validator(None).expect_err("an absent list is outside one or two");
    assert_eq!(
        error.to_string(),
        "Invalid argument length. Expected one or two arguments",
    );

    let four = words(&["", "", "", ""]);
    let error = one_to_three_arguments_validator(Some(four.as_slice()))
        .expect_err("four arguments are outside one to three");
    assert_eq!(
        error.to_string(),
        "Invalid argument length. Expected one, two, or three arguments",
    );
}

#[test]
fn validate_binds_each_family_to_its_shape() {
    assert_eq!(validate(InstructionKind::Takeoff, None), Ok(()));
    assert_eq!(validate(InstructionKind::Abort, Some(&[])), Ok(()));

    let runway = words(&["27r"]);
    assert_eq!(
        validate(InstructionKind::Takeoff, Some(runway.as_slice())),
        Err(ValidationError::ExpectedZeroArguments),
    );

    let speed = words(&["250"]);
    assert_eq!(validate(InstructionKind::Speed, Some(speed.as_slice())), Ok(()));
    assert_eq!(
        validate(InstructionKind::Squawk, Some(&[])),
        Err(ValidationError::ExpectedSingleArgument),
    );

    assert_eq!(validate(InstructionKind::Taxi, None), Ok(()));
    let taxi = words(&["27r", "27l"]);
    assert_eq!(
        validate(InstructionKind::Taxi, Some(taxi.as_slice())),
        Err(ValidationError::ExpectedZeroOrOneArgument),
    );

    let altitude = words(&["180", "fast"]);
    assert_eq!(
        validate(InstructionKind::Altitude, Some(altitude.as_slice())),
        Err(ValidationError::InvalidExpediteKeyword),
    );

    let heading = words(&["042"]);
    assert_eq!(
        validate(InstructionKind::Heading, Some(heading.as_slice())),
        Ok(()),
    );
}

#[test]
fn validators_return_identical_results_on_repeated_calls() {
    let args = vec![Arg::word("l"), Arg::word("threeve"), Arg::flag(true)];

    let first = heading_validator(Some(args.as_slice()));
    let second = heading_validator(Some(args.as_slice()));
    assert_eq!(first, second, "validators hold no state between calls");

    let first = altitude_validator(None);
    let second = altitude_validator(None);
    assert_eq!(first, second);
}
