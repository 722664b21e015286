use crate::position::{Position, ORIGIN};
use crate::random::CoinFlip;

/// Facing codes laid out like a numeric keypad: 8 is up, 2 is down, 5 means
/// the two cells coincide. Downstream animation and AI code keys off the
/// numeric values, so the discriminants are fixed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(i32)]
pub enum Direction {
    DownLeft = 1,
    Down = 2,
    DownRight = 3,
    Left = 4,
    Center = 5,
    Right = 6,
    UpLeft = 7,
    Up = 8,
    UpRight = 9,
}

pub const ALL8: [Direction; 8] = [
    Direction::DownLeft,
    Direction::Down,
    Direction::DownRight,
    Direction::Left,
    Direction::Right,
    Direction::UpLeft,
    Direction::Up,
    Direction::UpRight,
];

impl Direction {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Direction> {
        match code {
            1 => Some(Direction::DownLeft),
            2 => Some(Direction::Down),
            3 => Some(Direction::DownRight),
            4 => Some(Direction::Left),
            5 => Some(Direction::Center),
            6 => Some(Direction::Right),
            7 => Some(Direction::UpLeft),
            8 => Some(Direction::Up),
            9 => Some(Direction::UpRight),
            _ => None,
        }
    }

    /// Unit step in this direction.
    pub fn offset(self) -> Position {
        let code = self.code() - 1;
        Position::new(code % 3 - 1, 1 - code / 3)
    }

    pub fn is_diagonal(self) -> bool {
        matches!(self, Direction::DownLeft | Direction::DownRight | Direction::UpLeft | Direction::UpRight)
    }

    pub fn is_cardinal(self) -> bool {
        matches!(self, Direction::Down | Direction::Left | Direction::Right | Direction::Up)
    }
}

impl Position {
    pub fn step(self, dir: Direction) -> Position {
        self + dir.offset()
    }

    /// Which of the four cardinal directions `other` lies in, seen from `self`.
    ///
    /// An exact diagonal is nudged one cell along an axis picked by `coin`
    /// (true widens x, false widens y), so the coin is consulted only on ties.
    pub fn dir4<C: CoinFlip + ?Sized>(self, other: Position, coin: &mut C) -> Direction {
        let delta = other - self;
        if delta == ORIGIN {
            return Direction::Center;
        }

        let mut dx = delta.x() as i64;
        let mut dy = delta.y() as i64;
        if dx.abs() == dy.abs() {
            if coin.coin_flip() {
                dx += 1;
            } else {
                dy += 1;
            }
        }

        if dx.abs() > dy.abs() {
            if dx > 0 {Direction::Right} else {Direction::Left}
        } else {
            if dy > 0 {Direction::Down} else {Direction::Up}
        }
    }

    /// Eight-way direction toward `other`. Diagonals win while the difference
    /// between the axis magnitudes stays within a third of the total distance.
    pub fn dir8(self, other: Position) -> Direction {
        let delta = other - self;
        if delta == ORIGIN {
            return Direction::Center;
        }

        let d = (delta.x() as i64).abs() - (delta.y() as i64).abs();
        let band = delta.sum() / 3;

        if d > band {
            if delta.x() > 0 {Direction::Right} else {Direction::Left}
        } else if d < -band {
            if delta.y() > 0 {Direction::Down} else {Direction::Up}
        } else {
            match (delta.x() < 0, delta.y() < 0) {
                (true, true) => Direction::UpLeft,
                (true, false) => Direction::DownLeft,
                (false, true) => Direction::UpRight,
                (false, false) => Direction::DownRight,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{new_random, CoinFn, ForcedCoin};
    use proptest::prelude::*;

    fn code4(to: (i32, i32), coin: bool) -> i32 {
        ORIGIN.dir4(Position::from(to), &mut ForcedCoin(coin)).code()
    }

    #[test]
    fn numpad_codes() {
        let codes: Vec<i32> = ALL8.iter().map(|d| d.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 6, 7, 8, 9]);
        assert_eq!(Direction::Center.code(), 5);
        for code in 1..=9 {
            assert_eq!(Direction::from_code(code).map(Direction::code), Some(code));
        }
        assert_eq!(Direction::from_code(0), None);
        assert_eq!(Direction::from_code(10), None);
    }

    #[test]
    fn offsets_follow_screen_axes() {
        assert_eq!(Direction::Up.offset(), Position::new(0, -1));
        assert_eq!(Direction::Down.offset(), Position::new(0, 1));
        assert_eq!(Direction::Left.offset(), Position::new(-1, 0));
        assert_eq!(Direction::Right.offset(), Position::new(1, 0));
        assert_eq!(Direction::UpLeft.offset(), Position::new(-1, -1));
        assert_eq!(Direction::UpRight.offset(), Position::new(1, -1));
        assert_eq!(Direction::DownLeft.offset(), Position::new(-1, 1));
        assert_eq!(Direction::DownRight.offset(), Position::new(1, 1));
        assert_eq!(Direction::Center.offset(), ORIGIN);
        assert_eq!(Position::new(4, 4).step(Direction::UpLeft), Position::new(3, 3));
    }

    #[test]
    fn diagonal_and_cardinal_partition() {
        for dir in ALL8.iter() {
            assert_ne!(dir.is_diagonal(), dir.is_cardinal());
        }
        assert!(!Direction::Center.is_diagonal());
        assert!(!Direction::Center.is_cardinal());
    }

    #[test]
    fn dir4_cardinals() {
        assert_eq!(code4((5, 0), true), 6);
        assert_eq!(code4((-5, 0), true), 4);
        assert_eq!(code4((0, 5), true), 2);
        assert_eq!(code4((0, -5), true), 8);
        assert_eq!(code4((0, 0), true), 5);
        assert_eq!(code4((7, -2), false), 6);
        assert_eq!(code4((-1, -9), false), 8);
    }

    #[test]
    fn dir4_tie_break_branches() {
        assert_eq!(code4((3, 3), true), 6);
        assert_eq!(code4((3, 3), false), 2);
        assert_eq!(code4((-3, -3), true), 8);
        assert_eq!(code4((-3, -3), false), 4);
        assert_eq!(code4((-3, 3), true), 2);
        assert_eq!(code4((-3, 3), false), 2);
    }

    #[test]
    fn dir4_is_relative_to_self() {
        let from = Position::new(10, 10);
        assert_eq!(from.dir4(Position::new(10, 4), &mut ForcedCoin(true)), Direction::Up);
        assert_eq!(from.dir4(from, &mut ForcedCoin(true)), Direction::Center);
    }

    #[test]
    fn dir4_flips_only_on_ties() {
        let mut flips = 0;
        let mut coin = CoinFn(|| { flips += 1; true });
        ORIGIN.dir4(Position::new(4, 1), &mut coin);
        ORIGIN.dir4(ORIGIN, &mut coin);
        ORIGIN.dir4(Position::new(2, -2), &mut coin);
        drop(coin);
        assert_eq!(flips, 1);
    }

    #[test]
    fn dir4_accepts_seeded_random() {
        let mut random = new_random(7);
        let dir = ORIGIN.dir4(Position::new(2, 2), &mut random);
        assert!(dir == Direction::Right || dir == Direction::Down);
    }

    #[test]
    fn dir8_examples() {
        assert_eq!(ORIGIN.dir8(Position::new(10, 1)), Direction::Right);
        assert_eq!(ORIGIN.dir8(Position::new(1, 1)), Direction::DownRight);
        assert_eq!(ORIGIN.dir8(ORIGIN), Direction::Center);
        assert_eq!(ORIGIN.dir8(Position::new(-1, -1)), Direction::UpLeft);
        assert_eq!(ORIGIN.dir8(Position::new(-1, 1)), Direction::DownLeft);
        assert_eq!(ORIGIN.dir8(Position::new(1, -1)), Direction::UpRight);
        assert_eq!(ORIGIN.dir8(Position::new(1, -9)), Direction::Up);
        assert_eq!(ORIGIN.dir8(Position::new(-9, 2)), Direction::Left);
        assert_eq!(ORIGIN.dir8(Position::new(0, 4)), Direction::Down);
    }

    #[test]
    fn dir8_band_edges() {
        // sum 9, band 3: d = 3 stays diagonal, d = 5 turns cardinal.
        assert_eq!(ORIGIN.dir8(Position::new(6, 3)), Direction::DownRight);
        assert_eq!(ORIGIN.dir8(Position::new(7, 2)), Direction::Right);
        assert_eq!(ORIGIN.dir8(Position::new(-3, -6)), Direction::UpLeft);
        assert_eq!(ORIGIN.dir8(Position::new(-2, -7)), Direction::Up);
        // sum 1, band 0: any imbalance is cardinal
        assert_eq!(ORIGIN.dir8(Position::new(-1, 0)), Direction::Left);
        assert_eq!(ORIGIN.dir8(Position::new(0, -1)), Direction::Up);
    }

    proptest! {
        #[test]
        fn dir8_of_a_neighbor_is_its_direction(x in -1000i32..1000, y in -1000i32..1000, i in 0usize..8) {
            let from = Position::new(x, y);
            let dir = ALL8[i];
            prop_assert_eq!(from.dir8(from.step(dir)), dir);
        }

        #[test]
        fn dir4_tie_branches_are_complementary(k in 1i32..1000, sx in prop::bool::ANY, sy in prop::bool::ANY) {
            let to = Position::new(if sx {k} else {-k}, if sy {k} else {-k});
            let a = ORIGIN.dir4(to, &mut ForcedCoin(true));
            let b = ORIGIN.dir4(to, &mut ForcedCoin(false));
            prop_assert!(a.is_cardinal() && b.is_cardinal());
            if sx && sy {
                prop_assert_eq!((a, b), (Direction::Right, Direction::Down));
            }
        }

        #[test]
        fn dir8_is_translation_invariant(x in -1000i32..1000, y in -1000i32..1000, dx in -50i32..50, dy in -50i32..50) {
            let from = Position::new(x, y);
            let to = from + (dx, dy);
            prop_assert_eq!(from.dir8(to), ORIGIN.dir8(Position::new(dx, dy)));
        }
    }
}
