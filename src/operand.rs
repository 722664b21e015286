use crate::position::Position;

/// Right-hand side of the elementwise operators on `Position`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operand {
    Position(Position),
    Scalar(i32),
    Pair(i32, i32),
}

impl Operand {
    /// The (x, y) values combined with a position; a scalar applies to both axes.
    pub fn components(self) -> (i32, i32) {
        match self {
            Operand::Position(pos) => (pos.x(), pos.y()),
            Operand::Scalar(s) => (s, s),
            Operand::Pair(x, y) => (x, y),
        }
    }

    pub fn is_zero_divisor(self) -> bool {
        let (x, y) = self.components();
        x == 0 || y == 0
    }
}

impl From<Position> for Operand {
    fn from(pos: Position) -> Self {
        Operand::Position(pos)
    }
}

impl From<i32> for Operand {
    fn from(s: i32) -> Self {
        Operand::Scalar(s)
    }
}

impl From<(i32, i32)> for Operand {
    fn from((x, y): (i32, i32)) -> Self {
        Operand::Pair(x, y)
    }
}

impl From<[i32; 2]> for Operand {
    fn from([x, y]: [i32; 2]) -> Self {
        Operand::Pair(x, y)
    }
}
