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

pub mod commands;
pub mod config;
pub mod reply;
pub mod rolls;

pub use table_dice::{DiceError, Roll, RollPolicy};

use commands::{Command, QuickRoll};
use config::BotConfig;
use reply::RollReply;
use rolls::RollExecutor;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandResult {
    Help { text: String },
    Roll(RollReply),
    Error { message: String },
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Help { text } => f.write_str(text),
            CommandResult::Roll(reply) => fmt::Display::fmt(reply, f),
            CommandResult::Error { message } => f.write_str(message),
        }
    }
}

pub struct RollBot {
    roll: RollExecutor,
    config: BotConfig,
}

impl RollBot {
    pub fn new(config: BotConfig) -> RollBot {
        let roll = RollExecutor::new(config.rng_reseed);
        RollBot::with_executor(config, roll)
    }

    pub fn with_executor(config: BotConfig, roll: RollExecutor) -> RollBot {
        RollBot { roll, config }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// `None` when the message is not addressed to the bot.
    pub fn eval(&self, message: &str) -> Option<CommandResult> {
        commands::parse_logging(
            message,
            &self.config.command_prefix,
            &self.config.roll_prefixes,
        )
        .map(|command| match command {
            Command::Help => CommandResult::Help {
                text: reply::help(&self.config.command_prefix),
            },
            Command::QuickRoll(quick) => self.quick_roll(quick),
            Command::Roll {
                text,
                policy,
                reason,
            } => {
                let roll = match policy {
                    Some(policy) => self.roll.roll_with_policy(&text, policy),
                    None => self.roll.roll(&text),
                };
                reply_or_error(
                    roll,
                    reason.map(|reason| format!("Rolling for: {}", reason)),
                )
            }
        })
    }

    fn quick_roll(&self, quick: QuickRoll) -> CommandResult {
        match reply_or_error(
            self.roll.roll(QuickRoll::NOTATION),
            Some(format!("Quick Roll: {}", quick.title())),
        ) {
            CommandResult::Roll(mut reply) => {
                reply.quick_rolls = false;
                CommandResult::Roll(reply)
            }
            other => other,
        }
    }
}

fn reply_or_error(roll: Result<Roll, DiceError>, title: Option<String>) -> CommandResult {
    match roll {
        Ok(roll) => CommandResult::Roll(RollReply::new(&roll, title)),
        Err(e) => {
            log::warn!("roll failed for {}: {}", e.token(), e);
            CommandResult::Error {
                message: format!("❌ {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot(roll_prefixes: Vec<&str>) -> RollBot {
        RollBot::with_executor(
            BotConfig {
                roll_prefixes: roll_prefixes.into_iter().map(String::from).collect(),
                ..BotConfig::default()
            },
            RollExecutor::from_seed(11),
        )
    }

    fn roll_reply(result: Option<CommandResult>) -> RollReply {
        match result {
            Some(CommandResult::Roll(reply)) => reply,
            other => panic!("expected roll reply, got {:?}", other),
        }
    }

    #[test]
    fn test_ignores_other_messages() {
        assert_eq!(bot(vec![]).eval("just chatting about 2d6"), None);
    }

    #[test]
    fn test_help() {
        match bot(vec![]).eval("!help") {
            Some(CommandResult::Help { text }) => assert!(text.contains("`!`")),
            other => panic!("expected help, got {:?}", other),
        }
        assert!(matches!(
            bot(vec![]).eval("!what"),
            Some(CommandResult::Help { .. })
        ));
    }

    #[test]
    fn test_roll_with_reason() {
        let reply = roll_reply(bot(vec![]).eval("!r 2d6+3 # fire damage"));
        assert_eq!(reply.title.as_deref(), Some("Rolling for: fire damage"));
        assert!(reply.description.starts_with("🎲 **2d6+3**\nRolls: ["));
    }

    #[test]
    fn test_batch_roll() {
        let reply = roll_reply(bot(vec![]).eval("!roll 2d6 for damage 1d4"));
        assert_eq!(reply.title, None);
        assert!(reply.description.starts_with("**Multiple Rolls**\n"));
        assert!(!reply.quick_rolls);
    }

    #[test]
    fn test_roll_prefix() {
        let reply = roll_reply(bot(vec!["/r"]).eval("/r d20"));
        assert!(reply.quick_rolls);
        assert_eq!(bot(vec!["/r"]).eval("/r nothing"), None);
    }

    #[test]
    fn test_policy_roll() {
        let reply = roll_reply(bot(vec![]).eval("!adv 1d20+5"));
        assert!(reply.description.ends_with("*"));
        assert!(reply.description.contains("(advantage)\n*Other roll: "));
    }

    #[test]
    fn test_quick_roll() {
        let reply = roll_reply(bot(vec![]).eval("!q attack"));
        assert_eq!(reply.title.as_deref(), Some("Quick Roll: Attack Roll"));
        assert!(reply.description.starts_with("🎲 **1d20**"));
        assert!(!reply.quick_rolls);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            bot(vec![]).eval("!r 0d6"),
            Some(CommandResult::Error {
                message: "❌ Number of dice must be between 1 and 100".to_string()
            })
        );
        assert_eq!(
            bot(vec![]).eval("!r 1d1001"),
            Some(CommandResult::Error {
                message: "❌ Dice sides must be between 2 and 1000".to_string()
            })
        );
        assert_eq!(
            bot(vec![]).eval("!r fireball"),
            Some(CommandResult::Error {
                message: "❌ Invalid dice notation. Use format: XdY+Z (e.g., 2d6+3)".to_string()
            })
        );
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(&bot(vec![]).eval("!r 1d6").unwrap()).unwrap();
        assert_eq!(value["type"], "roll");
        assert_eq!(value["color"], reply::COLOR_DEFAULT);
        assert!(value["description"].is_string());

        let value = serde_json::to_value(&bot(vec![]).eval("!r 0d6").unwrap()).unwrap();
        assert_eq!(value["type"], "error");
    }
}
