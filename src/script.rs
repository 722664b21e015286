// Entry points for game-rule scripts, whose values arrive dynamically typed.
// Wrong shapes become `PositionError::TypeMismatch`; comparisons against
// anything but a position are soft and yield `None`.

use crate::direction::Direction;
use crate::error::{PositionError, PositionResult};
use crate::operand::Operand;
use crate::position::Position;
use crate::random::CoinFlip;
use std::convert::TryFrom;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Position(Position),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Position(_) => "position",
        }
    }

    fn mismatch<T>(&self, expected: &'static str) -> PositionResult<T> {
        Err(PositionError::TypeMismatch { expected, found: self.type_name() })
    }

    fn as_coord(&self) -> PositionResult<i32> {
        match *self {
            Value::Int(n) => i32::try_from(n).map_err(|_| PositionError::OutOfRange(n)),
            _ => self.mismatch("integer"),
        }
    }

    fn as_position(&self) -> PositionResult<Position> {
        match *self {
            Value::Position(pos) => Ok(pos),
            _ => self.mismatch("position"),
        }
    }

    fn as_operand(&self) -> PositionResult<Operand> {
        match self {
            Value::Position(pos) => Ok(Operand::Position(*pos)),
            Value::Int(_) => Ok(Operand::Scalar(self.as_coord()?)),
            Value::Array(items) if items.len() == 2 => {
                Ok(Operand::Pair(items[0].as_coord()?, items[1].as_coord()?))
            }
            _ => self.mismatch("position, integer or pair"),
        }
    }
}

impl From<Position> for Value {
    fn from(pos: Position) -> Self {
        Value::Position(pos)
    }
}

pub fn construct(x: &Value, y: &Value) -> PositionResult<Position> {
    Ok(Position::new(x.as_coord()?, y.as_coord()?))
}

pub fn set_x<'a>(pos: &'a mut Position, x: &Value) -> PositionResult<&'a mut Position> {
    Ok(pos.set_x(x.as_coord()?))
}

pub fn set_y<'a>(pos: &'a mut Position, y: &Value) -> PositionResult<&'a mut Position> {
    Ok(pos.set_y(y.as_coord()?))
}

/// Sets both axes, leaving `pos` untouched if either value is rejected.
pub fn set<'a>(pos: &'a mut Position, x: &Value, y: &Value) -> PositionResult<&'a mut Position> {
    let x = x.as_coord()?;
    let y = y.as_coord()?;
    Ok(pos.set(x, y))
}

pub fn to_pair(pos: Position) -> Value {
    Value::Array(vec![Value::Int(pos.x() as i64), Value::Int(pos.y() as i64)])
}

pub fn add(pos: Position, rhs: &Value) -> PositionResult<Position> {
    Ok(pos + rhs.as_operand()?)
}

pub fn sub(pos: Position, rhs: &Value) -> PositionResult<Position> {
    Ok(pos - rhs.as_operand()?)
}

pub fn mul(pos: Position, rhs: &Value) -> PositionResult<Position> {
    Ok(pos * rhs.as_operand()?)
}

pub fn div(pos: Position, rhs: &Value) -> PositionResult<Position> {
    pos.checked_div(rhs.as_operand()?)
}

pub fn equals(pos: Position, other: &Value) -> Option<bool> {
    other.as_position().ok().map(|other| pos == other)
}

/// Magnitude comparison: `pos.sum() - other.sum()`.
pub fn compare(pos: Position, other: &Value) -> Option<i64> {
    other.as_position().ok().map(|other| pos.sum_difference(other))
}

pub fn inner_circle(pos: Position, r: &Value) -> PositionResult<bool> {
    pos.inner_circle(r.as_coord()?)
}

pub fn dir4<C: CoinFlip + ?Sized>(pos: Position, other: &Value, coin: &mut C) -> PositionResult<Direction> {
    Ok(pos.dir4(other.as_position()?, coin))
}

pub fn dir8(pos: Position, other: &Value) -> PositionResult<Direction> {
    Ok(pos.dir8(other.as_position()?))
}
