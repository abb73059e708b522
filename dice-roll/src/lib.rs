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

//! Parsing, rolling and rendering of `XdY±Z` dice notation.

pub mod dice_roll;
pub mod dice_types;
pub mod error;
pub mod format;
pub mod limits;
pub mod parser;

pub use dice_roll::{roll, roll_batch_or_single, roll_with_policy, RngRoller, Roller, SequenceRoller};
pub use dice_types::{
    AdvantageResult, BatchResult, Critical, DiceExpression, Roll, RollPolicy, RollResult,
};
pub use error::DiceError;
pub use format::format;
pub use limits::DiceLimits;
pub use parser::{extract_notations, parse};
