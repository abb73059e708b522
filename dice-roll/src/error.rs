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

use thiserror::Error;

/// Why a notation token was rejected. Range variants carry the parsed value,
/// or `None` when the digits do not even fit a `u32`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("Invalid dice notation. Use format: XdY+Z (e.g., 2d6+3)")]
    InvalidNotation { token: String },
    #[error("Number of dice must be between {min} and {max}")]
    DiceCountOutOfRange {
        token: String,
        count: Option<u32>,
        min: u32,
        max: u32,
    },
    #[error("Dice sides must be between {min} and {max}")]
    DiceSidesOutOfRange {
        token: String,
        sides: Option<u32>,
        min: u32,
        max: u32,
    },
}

impl DiceError {
    pub fn token(&self) -> &str {
        match self {
            DiceError::InvalidNotation { token } => token,
            DiceError::DiceCountOutOfRange { token, .. } => token,
            DiceError::DiceSidesOutOfRange { token, .. } => token,
        }
    }
}
