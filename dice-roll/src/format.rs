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

use crate::dice_types::*;
use std::fmt;

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl fmt::Display for RollPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollPolicy::Advantage => f.write_str("advantage"),
            RollPolicy::Disadvantage => f.write_str("disadvantage"),
        }
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🎲 **{}**\nRolls: [", self.notation())?;
        for (i, face) in self.rolls().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", face)?;
        }
        f.write_str("]")?;
        if self.modifier() != 0 {
            write!(f, " {:+}", self.modifier())?;
        }
        write!(f, "\n**Total: {}**", self.total())
    }
}

impl fmt::Display for AdvantageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})\n*Other roll: {}*",
            self.chosen(),
            self.policy(),
            self.other().total()
        )
    }
}

impl fmt::Display for BatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("**Multiple Rolls**\n")?;
        for result in self.results() {
            write!(f, "{}\n\n", result)?;
        }
        write!(f, "**Grand Total: {}**", self.grand_total())
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roll::Simple(result) => fmt::Display::fmt(result, f),
            Roll::Advantage(result) => fmt::Display::fmt(result, f),
            Roll::Batch(result) => fmt::Display::fmt(result, f),
        }
    }
}

pub fn format(roll: &Roll) -> String {
    roll.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dice_roll::{roll, roll_batch_or_single, roll_with_policy, SequenceRoller},
        parser::parse,
    };

    fn simple(notation: &str, faces: Vec<u32>) -> RollResult {
        roll(&parse(notation).unwrap(), &mut SequenceRoller::new(faces))
    }

    #[test]
    fn test_format_simple() {
        assert_eq!(
            simple("2d6+3", vec![4, 2]).to_string(),
            "🎲 **2d6+3**\nRolls: [4, 2] +3\n**Total: 9**"
        );
        assert_eq!(
            simple("3d8-2", vec![1, 8, 5]).to_string(),
            "🎲 **3d8-2**\nRolls: [1, 8, 5] -2\n**Total: 12**"
        );
        assert_eq!(
            simple("d20+0", vec![7]).to_string(),
            "🎲 **d20+0**\nRolls: [7]\n**Total: 7**"
        );
    }

    #[test]
    fn test_format_fixed_d20() {
        let text = format(&Roll::Simple(simple("1d20", vec![20])));
        assert_eq!(text, "🎲 **1d20**\nRolls: [20]\n**Total: 20**");
        assert!(text.contains("1d20"));
        assert!(text.contains("20"));
    }

    #[test]
    fn test_format_advantage() {
        let mut roller = SequenceRoller::new(vec![4, 17]);
        let result = roll_with_policy("1d20+2", RollPolicy::Advantage, &mut roller).unwrap();
        assert_eq!(
            format(&Roll::Advantage(result)),
            "🎲 **1d20+2**\nRolls: [17] +2\n**Total: 19** (advantage)\n*Other roll: 6*"
        );

        let mut roller = SequenceRoller::new(vec![4, 17]);
        let result = roll_with_policy("1d20", RollPolicy::Disadvantage, &mut roller).unwrap();
        assert_eq!(
            result.to_string(),
            "🎲 **1d20**\nRolls: [4]\n**Total: 4** (disadvantage)\n*Other roll: 17*"
        );
    }

    #[test]
    fn test_format_batch() {
        let mut roller = SequenceRoller::new(vec![2, 5, 3]);
        let result = roll_batch_or_single("2d6 for damage 1d4+1", &mut roller).unwrap();
        assert_eq!(
            format(&result),
            "**Multiple Rolls**\n\
             🎲 **2d6**\nRolls: [2, 5]\n**Total: 7**\n\n\
             🎲 **1d4+1**\nRolls: [3] +1\n**Total: 4**\n\n\
             **Grand Total: 11**"
        );
    }

    #[test]
    fn test_format_is_stable() {
        let mut roller = SequenceRoller::new(vec![6, 1, 4]);
        let result = roll_batch_or_single("d6 d6 d6-1", &mut roller).unwrap();
        assert_eq!(format(&result), format(&result));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(RollPolicy::Advantage.to_string(), "advantage");
        assert_eq!(RollPolicy::Disadvantage.to_string(), "disadvantage");
    }
}
