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

use crate::error::DiceError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 100;
pub const MIN_SIDES: u32 = 2;
pub const MAX_SIDES: u32 = 1000;

/// Sides of the die whose single-die rolls can be critical.
pub const CRITICAL_SIDES: u32 = 20;

/// A validated `XdY±Z` expression. Only [`crate::parser::parse`] builds these,
/// so `count` and `sides` are always in range.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DiceExpression {
    count: u32,
    sides: u32,
    modifier: i64,
    notation: String,
}

impl DiceExpression {
    pub(crate) fn new(count: u32, sides: u32, modifier: i64, notation: String) -> DiceExpression {
        DiceExpression {
            count,
            sides,
            modifier,
            notation,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// The text this expression was parsed from, verbatim.
    pub fn notation(&self) -> &str {
        &self.notation
    }
}

impl TryFrom<String> for DiceExpression {
    type Error = DiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        crate::parser::parse(&value)
    }
}

impl From<DiceExpression> for String {
    fn from(expression: DiceExpression) -> Self {
        expression.notation
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RollPolicy {
    Advantage,
    Disadvantage,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Critical {
    Success,
    Failure,
}

#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RollResult {
    expression: DiceExpression,
    rolls: Vec<u32>,
    total: i64,
    natural: i64,
}

impl RollResult {
    pub(crate) fn new(
        expression: DiceExpression,
        rolls: Vec<u32>,
        total: i64,
        natural: i64,
    ) -> RollResult {
        RollResult {
            expression,
            rolls,
            total,
            natural,
        }
    }

    pub fn expression(&self) -> &DiceExpression {
        &self.expression
    }

    pub fn notation(&self) -> &str {
        self.expression.notation()
    }

    pub fn count(&self) -> u32 {
        self.expression.count()
    }

    pub fn sides(&self) -> u32 {
        self.expression.sides()
    }

    pub fn modifier(&self) -> i64 {
        self.expression.modifier()
    }

    /// Individual die faces in the order they were rolled.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// Sum of the faces without the modifier.
    pub fn natural(&self) -> i64 {
        self.natural
    }

    /// A lone d20 showing 20 or 1.
    pub fn critical(&self) -> Option<Critical> {
        if self.count() != 1 || self.sides() != CRITICAL_SIDES {
            return None;
        }
        match self.rolls.first().copied() {
            Some(CRITICAL_SIDES) => Some(Critical::Success),
            Some(1) => Some(Critical::Failure),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AdvantageResult {
    chosen: RollResult,
    other: RollResult,
    policy: RollPolicy,
}

impl AdvantageResult {
    /// Picks between two rolls of the same expression by total.
    /// Ties keep `first` under both policies.
    pub fn choose(first: RollResult, second: RollResult, policy: RollPolicy) -> AdvantageResult {
        let keep_first = match policy {
            RollPolicy::Advantage => first.total >= second.total,
            RollPolicy::Disadvantage => first.total <= second.total,
        };
        let (chosen, other) = if keep_first {
            (first, second)
        } else {
            (second, first)
        };
        AdvantageResult {
            chosen,
            other,
            policy,
        }
    }

    pub fn chosen(&self) -> &RollResult {
        &self.chosen
    }

    pub fn other(&self) -> &RollResult {
        &self.other
    }

    pub fn policy(&self) -> RollPolicy {
        self.policy
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BatchResult {
    results: Vec<RollResult>,
    grand_total: i64,
}

impl BatchResult {
    pub fn new(results: Vec<RollResult>) -> BatchResult {
        let grand_total = results
            .iter()
            .fold(0i64, |sum, result| sum.saturating_add(result.total));
        BatchResult {
            results,
            grand_total,
        }
    }

    pub fn results(&self) -> &[RollResult] {
        &self.results
    }

    pub fn grand_total(&self) -> i64 {
        self.grand_total
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Roll {
    Simple(RollResult),
    Advantage(AdvantageResult),
    Batch(BatchResult),
}

impl Roll {
    /// The roll a caller highlights: the single roll, or the kept one.
    /// Batches have none.
    pub fn primary(&self) -> Option<&RollResult> {
        match self {
            Roll::Simple(result) => Some(result),
            Roll::Advantage(result) => Some(result.chosen()),
            Roll::Batch(_) => None,
        }
    }

    pub fn critical(&self) -> Option<Critical> {
        self.primary().and_then(RollResult::critical)
    }
}

impl From<RollResult> for Roll {
    fn from(result: RollResult) -> Self {
        Roll::Simple(result)
    }
}

impl From<AdvantageResult> for Roll {
    fn from(result: AdvantageResult) -> Self {
        Roll::Advantage(result)
    }
}

impl From<BatchResult> for Roll {
    fn from(result: BatchResult) -> Self {
        Roll::Batch(result)
    }
}
