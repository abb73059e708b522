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

use crate::dice_types::DiceExpression;

/// Smallest and largest total an expression can roll.
pub trait DiceLimits {
    fn min(&self) -> i64;
    fn max(&self) -> i64;
}

impl DiceLimits for DiceExpression {
    fn min(&self) -> i64 {
        i64::from(self.count()).saturating_add(self.modifier())
    }

    fn max(&self) -> i64 {
        (i64::from(self.count()) * i64::from(self.sides())).saturating_add(self.modifier())
    }
}
