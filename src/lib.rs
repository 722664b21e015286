extern crate rand;
extern crate rand_pcg;

mod direction;
mod error;
mod operand;
mod position;
mod random;
pub mod script;

pub use crate::direction::{Direction, ALL8};
pub use crate::error::{PositionError, PositionResult};
pub use crate::operand::Operand;
pub use crate::position::{BySum, Position, ORIGIN};
pub use crate::random::{new_random, CoinFlip, CoinFn, ForcedCoin, Random};

// Host-facing interface. The host engine owns its random number generator and
// passes the tie-break bit in as `coin` (nonzero is true).

#[no_mangle]
pub extern "C" fn rs_dir4(from_x: i32, from_y: i32, to_x: i32, to_y: i32, coin: i32) -> i32 {
    let from = Position::new(from_x, from_y);
    from.dir4(Position::new(to_x, to_y), &mut ForcedCoin(coin != 0)).code()
}

#[no_mangle]
pub extern "C" fn rs_dir8(from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> i32 {
    Position::new(from_x, from_y).dir8(Position::new(to_x, to_y)).code()
}

/// 1 if inside, 0 if outside, -1 for a zero radius.
#[no_mangle]
pub extern "C" fn rs_inner_circle(x: i32, y: i32, r: i32) -> i32 {
    match Position::new(x, y).inner_circle(r) {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => -1,
    }
}
