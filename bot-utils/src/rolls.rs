use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{Duration, Instant};
use table_dice::{
    roll_batch_or_single, roll_with_policy, DiceError, RngRoller, Roll, RollPolicy,
};

struct RngProvider {
    rng: ChaCha20Rng,
    seeded_at: Instant,
    rng_reseed: Option<Duration>,
}

impl RngProvider {
    fn get_rng(&mut self) -> Xoshiro256PlusPlus {
        if let Some(reseed) = self.rng_reseed {
            if self.seeded_at.elapsed() >= reseed {
                self.rng = ChaCha20Rng::from_entropy();
                self.seeded_at = Instant::now();
                log::debug!("reseeded roll rng");
            }
        }
        let mut seed: <Xoshiro256PlusPlus as SeedableRng>::Seed = Default::default();
        self.rng.fill(&mut seed);
        Xoshiro256PlusPlus::from_seed(seed)
    }
}

/// Hands every roll its own generator, seeded from a shared master.
pub struct RollExecutor {
    rng: Mutex<RngProvider>,
}

impl RollExecutor {
    pub fn new(rng_reseed: Duration) -> RollExecutor {
        RollExecutor::with_master(ChaCha20Rng::from_entropy(), Some(rng_reseed))
    }

    /// Deterministic executor. Never reseeds.
    pub fn from_seed(seed: u64) -> RollExecutor {
        RollExecutor::with_master(ChaCha20Rng::seed_from_u64(seed), None)
    }

    fn with_master(rng: ChaCha20Rng, rng_reseed: Option<Duration>) -> RollExecutor {
        RollExecutor {
            rng: Mutex::new(RngProvider {
                rng,
                seeded_at: Instant::now(),
                rng_reseed,
            }),
        }
    }

    fn roller(&self) -> RngRoller<Xoshiro256PlusPlus> {
        RngRoller::new(self.rng.lock().get_rng())
    }

    pub fn roll(&self, text: &str) -> Result<Roll, DiceError> {
        roll_batch_or_single(text, &mut self.roller())
    }

    pub fn roll_with_policy(&self, notation: &str, policy: RollPolicy) -> Result<Roll, DiceError> {
        roll_with_policy(notation, policy, &mut self.roller()).map(Roll::Advantage)
    }
}
