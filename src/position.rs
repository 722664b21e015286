use crate::error::{PositionError, PositionResult};
use crate::operand::Operand;
use std::cmp::Ordering;
use std::fmt;

/// Cell position on the map grid. X grows to the right, Y grows downward.
///
/// Equality is exact coordinate match. There is intentionally no `Ord` impl:
/// positions are ordered by `sum()` through `cmp_by_sum` or `BySum`, and that
/// ordering treats distinct cells with the same magnitude as equivalent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

pub const ORIGIN: Position = Position { x: 0, y: 0 };

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }

    pub fn set_x(&mut self, x: i32) -> &mut Self {
        self.x = x;
        self
    }

    pub fn set_y(&mut self, y: i32) -> &mut Self {
        self.y = y;
        self
    }

    pub fn set(&mut self, x: i32, y: i32) -> &mut Self {
        self.set_x(x).set_y(y)
    }

    pub fn to_pair(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Manhattan magnitude `|x| + |y|`.
    pub fn sum(self) -> i64 {
        (self.x as i64).abs() + (self.y as i64).abs()
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.wrapping_abs(), self.y.wrapping_abs())
    }

    pub fn sum_difference(self, other: Self) -> i64 {
        self.sum() - other.sum()
    }

    pub fn cmp_by_sum(self, other: Self) -> Ordering {
        self.sum().cmp(&other.sum())
    }

    /// Elementwise division that reports a zero divisor instead of panicking.
    pub fn checked_div<T: Into<Operand>>(self, rhs: T) -> PositionResult<Self> {
        let rhs = rhs.into();
        if rhs.is_zero_divisor() {
            return Err(PositionError::DivisionByZero);
        }
        let (x, y) = rhs.components();
        Ok(Self::new(self.x.wrapping_div(x), self.y.wrapping_div(y)))
    }

    /// True when the position lies strictly inside the circle of radius `r`
    /// around the origin. Points on the boundary are outside.
    pub fn inner_circle(self, r: i32) -> PositionResult<bool> {
        if r == 0 {
            return Err(PositionError::DivisionByZero);
        }
        let r = r as f64;
        let nx = (self.x as f64).abs() / r;
        let ny = (self.y as f64).abs() / r;
        Ok(nx * nx + ny * ny < 1.0)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        pos.to_pair()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Add, Sub and Mul wrap on overflow.

impl<T: Into<Operand>> std::ops::Add<T> for Position {
    type Output = Self;
    fn add(self, rhs: T) -> Self {
        let (x, y) = rhs.into().components();
        Self::new(self.x.wrapping_add(x), self.y.wrapping_add(y))
    }
}

impl<T: Into<Operand>> std::ops::AddAssign<T> for Position {
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Into<Operand>> std::ops::Sub<T> for Position {
    type Output = Self;
    fn sub(self, rhs: T) -> Self {
        let (x, y) = rhs.into().components();
        Self::new(self.x.wrapping_sub(x), self.y.wrapping_sub(y))
    }
}

impl<T: Into<Operand>> std::ops::SubAssign<T> for Position {
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T: Into<Operand>> std::ops::Mul<T> for Position {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        let (x, y) = rhs.into().components();
        Self::new(self.x.wrapping_mul(x), self.y.wrapping_mul(y))
    }
}

impl<T: Into<Operand>> std::ops::MulAssign<T> for Position {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Truncating division. Panics on a zero divisor like native integer division;
/// use `checked_div` to get `PositionError::DivisionByZero` instead.
impl<T: Into<Operand>> std::ops::Div<T> for Position {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        let (x, y) = rhs.into().components();
        Self::new(self.x / x, self.y / y)
    }
}

impl std::ops::Neg for Position {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

/// Orders positions by `sum()` alone, for sorting and heaps.
#[derive(Clone, Copy, Debug)]
pub struct BySum(pub Position);

impl Ord for BySum {
    fn cmp(&self, other: &BySum) -> Ordering {
        self.0.cmp_by_sum(other.0)
    }
}

impl PartialOrd for BySum {
    fn partial_cmp(&self, other: &BySum) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BySum {
    fn eq(&self, other: &BySum) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BySum {}
