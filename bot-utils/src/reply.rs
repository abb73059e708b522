use crate::commands::QuickRoll;
use serde::Serialize;
use std::fmt;
use table_dice::{dice_types::CRITICAL_SIDES, format, Critical, Roll};

pub const COLOR_CRITICAL_SUCCESS: u32 = 0x00FF00;
pub const COLOR_CRITICAL_FAILURE: u32 = 0xFF0000;
pub const COLOR_DEFAULT: u32 = 0x3498DB;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
}

/// Everything a front end needs to show a roll, without any markup of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollReply {
    pub title: Option<String>,
    pub description: String,
    pub fields: Vec<ReplyField>,
    pub color: u32,
    /// Offer the quick roll presets next to this reply.
    pub quick_rolls: bool,
}

impl RollReply {
    pub fn new(roll: &Roll, title: Option<String>) -> RollReply {
        let critical = roll.critical();
        let (fields, color) = match critical {
            Some(Critical::Success) => (
                vec![ReplyField {
                    name: "⚡ CRITICAL SUCCESS! ⚡".to_string(),
                    value: "Natural 20!".to_string(),
                }],
                COLOR_CRITICAL_SUCCESS,
            ),
            Some(Critical::Failure) => (
                vec![ReplyField {
                    name: "💀 CRITICAL FAILURE! 💀".to_string(),
                    value: "Natural 1!".to_string(),
                }],
                COLOR_CRITICAL_FAILURE,
            ),
            None => (vec![], COLOR_DEFAULT),
        };
        RollReply {
            title,
            description: format(roll),
            fields,
            color,
            quick_rolls: roll
                .primary()
                .map_or(false, |r| r.sides() == CRITICAL_SIDES),
        }
    }
}

impl fmt::Display for RollReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{}", title)?;
        }
        f.write_str(&self.description)?;
        for field in self.fields.iter() {
            write!(f, "\n{}\n{}", field.name, field.value)?;
        }
        if self.quick_rolls {
            f.write_str("\nQuick rolls: ")?;
            let names = QuickRoll::ALL
                .iter()
                .map(|q| q.keyword())
                .collect::<Vec<_>>()
                .join(", ");
            f.write_str(&names)?;
        }
        Ok(())
    }
}

pub fn help(prefix: &str) -> String {
    format!(
        "**Command Syntax**
all Commands are prefixed with `{prefix}`.
The prefix is recognized both with or without following whitespace.

`help`, `h` => show this help text
`roll [dice]`, `r [dice]` => roll dice written as `XdY+Z`, e.g. `2d6+3`. Several expressions in one message are rolled together and summed: `{prefix}r 2d6 for damage 1d4`
`advantage [dice]`, `adv [dice]` => roll twice and keep the higher total
`disadvantage [dice]`, `dis [dice]` => roll twice and keep the lower total
`quick [attack|save|check|initiative]`, `q [...]` => roll a d20 for a common check

Append `# [reason]` to a roll to say what it is for, e.g. `{prefix}adv 1d20+5 # stealth`.
Dice counts go from 1 to 100, sides from 2 to 1000.",
        prefix = prefix
    )
}
