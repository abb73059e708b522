use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till},
    character::complete::{multispace0, multispace1, satisfy},
    combinator::{all_consuming, eof, map, opt, recognize, rest, success, verify},
    multi::many1,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};
use table_dice::{extract_notations, RollPolicy};
use unicode_categories::UnicodeCategories;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRoll {
    Attack,
    Save,
    Check,
    Initiative,
}

impl QuickRoll {
    pub const NOTATION: &'static str = "1d20";

    pub const ALL: [QuickRoll; 4] = [
        QuickRoll::Attack,
        QuickRoll::Save,
        QuickRoll::Check,
        QuickRoll::Initiative,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            QuickRoll::Attack => "attack",
            QuickRoll::Save => "save",
            QuickRoll::Check => "check",
            QuickRoll::Initiative => "initiative",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QuickRoll::Attack => "Attack Roll",
            QuickRoll::Save => "Saving Throw",
            QuickRoll::Check => "Ability Check",
            QuickRoll::Initiative => "Initiative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Roll {
        text: String,
        policy: Option<RollPolicy>,
        reason: Option<String>,
    },
    QuickRoll(QuickRoll),
}

fn chars_set(input: &str) -> IResult<&str, char> {
    satisfy(|c| !(c.is_separator() || c.is_other()))(input)
}

/// Prefixes may not contain whitespace or control characters.
pub fn is_valid_prefix(prefix: &str) -> bool {
    all_consuming(recognize(many1(chars_set)))(prefix).is_ok()
}

/// Dice text up to an optional `# reason`.
fn parse_roll_body(input: &str) -> IResult<&str, (String, Option<String>)> {
    map(
        pair(take_till(|c| c == '#'), opt(preceded(tag("#"), rest))),
        |(text, reason): (&str, Option<&str>)| {
            (
                text.trim().to_owned(),
                reason
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(str::to_owned),
            )
        },
    )(input)
}

fn parse_help(input: &str) -> IResult<&str, Command> {
    map(alt((tag_no_case("help"), tag_no_case("h"))), |_| {
        Command::Help
    })(input)
}

fn parse_roll_command(input: &str) -> IResult<&str, Command> {
    preceded(
        pair(alt((tag_no_case("roll"), tag_no_case("r"))), multispace0),
        map(parse_roll_body, |(text, reason)| Command::Roll {
            text,
            policy: None,
            reason,
        }),
    )(input)
}

fn parse_policy(input: &str) -> IResult<&str, RollPolicy> {
    terminated(
        alt((
            map(
                alt((tag_no_case("advantage"), tag_no_case("adv"))),
                |_| RollPolicy::Advantage,
            ),
            map(
                alt((tag_no_case("disadvantage"), tag_no_case("dis"))),
                |_| RollPolicy::Disadvantage,
            ),
        )),
        multispace1,
    )(input)
}

fn parse_policy_roll(input: &str) -> IResult<&str, Command> {
    map(
        pair(parse_policy, parse_roll_body),
        |(policy, (text, reason))| Command::Roll {
            text,
            policy: Some(policy),
            reason,
        },
    )(input)
}

fn parse_quick_roll(input: &str) -> IResult<&str, Command> {
    preceded(
        pair(alt((tag_no_case("quick"), tag_no_case("q"))), multispace1),
        map(
            alt((
                map(tag_no_case("attack"), |_| QuickRoll::Attack),
                map(tag_no_case("save"), |_| QuickRoll::Save),
                map(tag_no_case("check"), |_| QuickRoll::Check),
                map(tag_no_case("initiative"), |_| QuickRoll::Initiative),
            )),
            Command::QuickRoll,
        ),
    )(input)
}

fn parse_command<'a>(input: &'a str, prefix: &str) -> IResult<&'a str, Command> {
    preceded(
        tag(prefix),
        alt((
            delimited(
                multispace0,
                alt((
                    parse_quick_roll,
                    parse_policy_roll,
                    parse_help,
                    parse_roll_command,
                )),
                pair(multispace0, eof),
            ),
            success(Command::Help),
        )),
    )(input)
}

fn parse_roll<'a>(input: &'a str, prefix: &str) -> IResult<&'a str, Command> {
    map(
        preceded(
            pair(tag(prefix), multispace0),
            verify(parse_roll_body, |(text, _): &(String, Option<String>)| {
                !extract_notations(text).is_empty()
            }),
        ),
        |(text, reason)| Command::Roll {
            text,
            policy: None,
            reason,
        },
    )(input)
}

pub fn parse(message: &str, command_prefix: &str, roll_prefixes: &[String]) -> Option<Command> {
    if let Ok((_, c)) = parse_command(message, command_prefix) {
        Some(c)
    } else {
        roll_prefixes
            .iter()
            .map(|prefix| parse_roll(message, prefix))
            .find_map(|r| r.ok().map(|res| res.1))
    }
}

pub fn parse_logging(
    message: &str,
    command_prefix: &str,
    roll_prefixes: &[String],
) -> Option<Command> {
    let command = parse(message, command_prefix, roll_prefixes);
    if let Some(c) = &command {
        log::info!("{:?}", c);
    }
    command
}
