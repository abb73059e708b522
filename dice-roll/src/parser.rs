/*
Copyright 2021 Robin Marchart

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::{
    dice_types::{DiceExpression, MAX_COUNT, MAX_SIDES, MIN_COUNT, MIN_SIDES},
    error::DiceError,
};

use nom::{
    bytes::complete::tag_no_case,
    character::complete::{digit0, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{pair, preceded, tuple},
    IResult,
};
use std::str::FromStr;

/// Digits of count and sides, still unchecked, plus the signed modifier.
pub type RawNotation<'a> = (&'a str, &'a str, i64);

pub fn parse_dice_digit(input: &str) -> IResult<&str, &str> {
    tag_no_case("d")(input)
}

pub fn parse_modifier(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(one_of("+-"), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

pub fn parse_notation(input: &str) -> IResult<&str, RawNotation> {
    map(
        tuple((
            digit0,
            preceded(parse_dice_digit, digit1),
            opt(parse_modifier),
        )),
        |(count, sides, modifier)| (count, sides, modifier.unwrap_or(0)),
    )(input)
}

/// Notation shape only. Digits are not converted, so oversized numbers still match.
pub fn recognize_notation(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        digit0,
        parse_dice_digit,
        digit1,
        opt(pair(one_of("+-"), digit1)),
    )))(input)
}

/// Whether the whole token is dice notation. Ranges are not checked.
pub fn is_notation(token: &str) -> bool {
    all_consuming(recognize_notation)(token).is_ok()
}

/// Whitespace separated tokens of `text` that look like dice notation, in order.
pub fn extract_notations(text: &str) -> Vec<&str> {
    text.split_whitespace().filter(|t| is_notation(t)).collect()
}

fn in_range(digits: &str, min: u32, max: u32) -> Result<u32, Option<u32>> {
    match digits.parse::<u32>() {
        Ok(value) if value >= min && value <= max => Ok(value),
        Ok(value) => Err(Some(value)),
        Err(_) => Err(None),
    }
}

pub fn parse(token: &str) -> Result<DiceExpression, DiceError> {
    let (count, sides, modifier) = match all_consuming(parse_notation)(token) {
        Ok((_, raw)) => raw,
        Err(_) => {
            return Err(DiceError::InvalidNotation {
                token: token.to_owned(),
            })
        }
    };
    let count = if count.is_empty() {
        1
    } else {
        in_range(count, MIN_COUNT, MAX_COUNT).map_err(|count| DiceError::DiceCountOutOfRange {
            token: token.to_owned(),
            count,
            min: MIN_COUNT,
            max: MAX_COUNT,
        })?
    };
    let sides = in_range(sides, MIN_SIDES, MAX_SIDES).map_err(|sides| {
        DiceError::DiceSidesOutOfRange {
            token: token.to_owned(),
            sides,
            min: MIN_SIDES,
            max: MAX_SIDES,
        }
    })?;
    Ok(DiceExpression::new(count, sides, modifier, token.to_owned()))
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
