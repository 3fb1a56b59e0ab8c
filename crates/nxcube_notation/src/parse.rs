use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{all_consuming, opt, value},
    multi::separated_list0,
    sequence::{delimited, preceded},
};
use nxcube_core::Axis;

use crate::ParseError;

/// Twist as written, before integers are parsed and repeats expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TwistToken<'a> {
    pub axis: Axis,
    pub index: &'a str,
    pub prime: bool,
    pub repeat: Option<&'a str>,
}

/// Splits a whole string into twist tokens.
pub(crate) fn twist_tokens(s: &str) -> Result<Vec<TwistToken<'_>>, ParseError> {
    let result = all_consuming(delimited(
        multispace0,
        separated_list0(multispace1, twist_token),
        multispace0,
    ))
    .parse_complete(s);

    match result {
        Ok((_remaining_input, tokens)) => Ok(tokens),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(ParseError::Syntax {
            offset: s.len() - e.input.len(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(ParseError::Syntax { offset: s.len() }),
    }
}

fn twist_token(s: &str) -> IResult<&str, TwistToken<'_>> {
    (
        axis,
        digit1,
        opt(char('\'')),
        opt(preceded(char('*'), digit1)),
    )
        .map(|(axis, index, prime, repeat)| TwistToken {
            axis,
            index,
            prime: prime.is_some(),
            repeat,
        })
        .parse(s)
}

fn axis(s: &str) -> IResult<&str, Axis> {
    alt((
        value(Axis::X, one_of("xX")),
        value(Axis::Y, one_of("yY")),
        value(Axis::Z, one_of("zZ")),
    ))
    .parse(s)
}
