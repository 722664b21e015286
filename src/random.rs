use rand::{Rng, SeedableRng};

pub type Random = rand_pcg::Pcg32;

pub fn new_random(seed: u64) -> Random {
    Random::seed_from_u64(seed)
}

/// Source of the single random bit `dir4` uses to break diagonal ties.
pub trait CoinFlip {
    fn coin_flip(&mut self) -> bool;
}

impl<R: Rng> CoinFlip for R {
    fn coin_flip(&mut self) -> bool {
        self.gen()
    }
}

/// A coin that always lands the same way.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ForcedCoin(pub bool);

impl CoinFlip for ForcedCoin {
    fn coin_flip(&mut self) -> bool {
        self.0
    }
}

/// Adapts a closure, e.g. a host engine callback.
pub struct CoinFn<F>(pub F);

impl<F: FnMut() -> bool> CoinFlip for CoinFn<F> {
    fn coin_flip(&mut self) -> bool {
        (self.0)()
    }
}
