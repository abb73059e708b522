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
    dice_types::*,
    error::DiceError,
    parser::{extract_notations, parse},
};
use rand::{distributions::Uniform, Rng};

#[cfg(feature = "logging")]
use log::debug;

/// Source of die faces. `roll_die` must return a value in `[1, sides]`.
pub trait Roller {
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<R: Roller + ?Sized> Roller for &mut R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

/// Uniform faces drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRoller<R: Rng> {
    rng: R,
}

impl<R: Rng> RngRoller<R> {
    pub fn new(rng: R) -> RngRoller<R> {
        RngRoller { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.sample(Uniform::new_inclusive(1, sides))
    }
}

/// Replays scripted faces, starting over once the sequence is used up.
/// Faces are clamped into `[1, sides]`; an empty script always rolls 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRoller {
    faces: Vec<u32>,
    position: usize,
}

impl SequenceRoller {
    pub fn new<I: IntoIterator<Item = u32>>(faces: I) -> SequenceRoller {
        SequenceRoller {
            faces: faces.into_iter().collect(),
            position: 0,
        }
    }
}

impl Roller for SequenceRoller {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.position % self.faces.len()];
        self.position = self.position.wrapping_add(1);
        face.max(1).min(sides)
    }
}

pub fn roll<R: Roller + ?Sized>(expression: &DiceExpression, roller: &mut R) -> RollResult {
    let rolls: Vec<u32> = (0..expression.count())
        .map(|_| roller.roll_die(expression.sides()))
        .collect();
    let natural: i64 = rolls.iter().map(|face| i64::from(*face)).sum();
    let total = natural.saturating_add(expression.modifier());

    #[cfg(feature = "logging")]
    {
        debug!("Dice roll result for {} is {:?}", expression, &rolls);
    }

    RollResult::new(expression.clone(), rolls, total, natural)
}

/// Rolls `notation` twice and keeps one result according to `policy`.
pub fn roll_with_policy<R: Roller + ?Sized>(
    notation: &str,
    policy: RollPolicy,
    roller: &mut R,
) -> Result<AdvantageResult, DiceError> {
    let expression = parse(notation)?;
    let first = roll(&expression, roller);
    let second = roll(&expression, roller);
    let result = AdvantageResult::choose(first, second, policy);

    #[cfg(feature = "logging")]
    {
        debug!(
            "kept {} over {} for {} with {}",
            result.chosen().total(),
            result.other().total(),
            &expression,
            result.policy()
        );
    }

    Ok(result)
}

/// Rolls every dice token found in `text`.
///
/// No token: the whole text is parsed as one expression, so its error surfaces.
/// One token: a plain roll. More: a batch in token order.
pub fn roll_batch_or_single<R: Roller + ?Sized>(
    text: &str,
    roller: &mut R,
) -> Result<Roll, DiceError> {
    match extract_notations(text).as_slice() {
        [] => Ok(Roll::Simple(roll(&parse(text.trim())?, roller))),
        [single] => Ok(Roll::Simple(roll(&parse(single)?, roller))),
        notations => {
            let expressions = notations
                .iter()
                .map(|notation| parse(notation))
                .collect::<Result<Vec<DiceExpression>, DiceError>>()?;
            let results = expressions
                .iter()
                .map(|expression| roll(expression, &mut *roller))
                .collect();
            Ok(Roll::Batch(BatchResult::new(results)))
        }
    }
}
