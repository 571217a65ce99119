//! Binary operators for the symbol form of `inject`.
//!
//! `my_inject_with` folds a source with a named operator instead of a block.
//! The operator is parsed from its symbol, and [`Operand`] defines what it
//! means for each element type.
//!
//! ```rust
//! use enumerables::{Operand, Operator};
//!
//! let add: Operator = ":+".parse().unwrap();
//! assert_eq!(add, Operator::Add);
//! assert_eq!(2_i32.operate(add, &3), Ok(5));
//! assert!(i32::MAX.operate(add, &1).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::element::Value;
use crate::error::EnumerableError;

/// A binary operator usable in place of an `inject` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, rounding integer quotients toward negative infinity.
    Divide,
    /// `%`, giving integer remainders the sign of the divisor.
    Remainder,
    /// `min`
    Min,
    /// `max`
    Max,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Remainder,
        Self::Min,
        Self::Max,
    ];

    /// Returns the symbol the operator is parsed from.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Applies the operator to two operands.
    ///
    /// # Errors
    ///
    /// Fails as [`Operand::operate`] does for `T`.
    pub fn apply<T: Operand>(self, left: T, right: &T) -> Result<T, EnumerableError> {
        left.operate(self, right)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

/// The error returned when a string names no [`Operator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator symbol `{symbol}`")]
pub struct ParseOperatorError {
    symbol: String,
}

impl ParseOperatorError {
    /// The text that failed to parse.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    /// Parses `+`, `-`, `*`, `/`, `%`, `min` or `max`, with an optional
    /// leading `:`.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let symbol = source.strip_prefix(':').unwrap_or(source);
        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
            .ok_or_else(|| ParseOperatorError {
                symbol: source.to_string(),
            })
    }
}

/// An element type a symbol operator can be applied to.
pub trait Operand: Sized {
    /// Combines `self` with `right`.
    ///
    /// # Errors
    ///
    /// - [`EnumerableError::Arithmetic`] when integer arithmetic overflows or
    ///   divides by zero
    /// - [`EnumerableError::UndefinedOperator`] when the operator has no
    ///   meaning for the operands
    fn operate(self, operator: Operator, right: &Self) -> Result<Self, EnumerableError>;
}

/// Integer division that rounds toward negative infinity.
trait FlooredDivision: Sized {
    fn floored_div(self, right: Self) -> Option<Self>;
    fn floored_rem(self, right: Self) -> Option<Self>;
}

macro_rules! floored_division {
    (signed: $($integer:ty),*) => {
        $(
            impl FlooredDivision for $integer {
                fn floored_div(self, right: Self) -> Option<Self> {
                    let quotient = self.checked_div(right)?;
                    if self % right != 0 && (self < 0) != (right < 0) {
                        Some(quotient - 1)
                    } else {
                        Some(quotient)
                    }
                }

                fn floored_rem(self, right: Self) -> Option<Self> {
                    let remainder = self.checked_rem(right)?;
                    if remainder != 0 && (remainder < 0) != (right < 0) {
                        Some(remainder + right)
                    } else {
                        Some(remainder)
                    }
                }
            }
        )*
    };
    (unsigned: $($integer:ty),*) => {
        $(
            impl FlooredDivision for $integer {
                fn floored_div(self, right: Self) -> Option<Self> {
                    self.checked_div(right)
                }

                fn floored_rem(self, right: Self) -> Option<Self> {
                    self.checked_rem(right)
                }
            }
        )*
    };
}

floored_division!(signed: i8, i16, i32, i64, i128, isize);
floored_division!(unsigned: u8, u16, u32, u64, u128, usize);

macro_rules! integer_operand {
    ($($integer:ty),*) => {
        $(
            impl Operand for $integer {
                fn operate(self, operator: Operator, right: &Self) -> Result<Self, EnumerableError> {
                    let right = *right;
                    let result = match operator {
                        Operator::Add => self.checked_add(right),
                        Operator::Subtract => self.checked_sub(right),
                        Operator::Multiply => self.checked_mul(right),
                        Operator::Divide => self.floored_div(right),
                        Operator::Remainder => self.floored_rem(right),
                        Operator::Min => Some(self.min(right)),
                        Operator::Max => Some(self.max(right)),
                    };
                    result.ok_or(EnumerableError::Arithmetic { operator })
                }
            }
        )*
    };
}

integer_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_operand {
    ($($float:ty),*) => {
        $(
            impl Operand for $float {
                fn operate(self, operator: Operator, right: &Self) -> Result<Self, EnumerableError> {
                    let right = *right;
                    Ok(match operator {
                        Operator::Add => self + right,
                        Operator::Subtract => self - right,
                        Operator::Multiply => self * right,
                        Operator::Divide => self / right,
                        Operator::Remainder => self % right,
                        Operator::Min => self.min(right),
                        Operator::Max => self.max(right),
                    })
                }
            }
        )*
    };
}

float_operand!(f32, f64);

impl Operand for String {
    fn operate(mut self, operator: Operator, right: &Self) -> Result<Self, EnumerableError> {
        match operator {
            Operator::Add => {
                self.push_str(right);
                Ok(self)
            }
            Operator::Min => Ok(if *right < self { right.clone() } else { self }),
            Operator::Max => Ok(if *right > self { right.clone() } else { self }),
            _ => Err(EnumerableError::UndefinedOperator {
                operator,
                operand: "text",
            }),
        }
    }
}

impl Operand for Value {
    #[allow(clippy::cast_precision_loss)]
    fn operate(self, operator: Operator, right: &Self) -> Result<Self, EnumerableError> {
        match (self, right) {
            (Self::Integer(left), Self::Integer(right)) => {
                left.operate(operator, right).map(Self::Integer)
            }
            (Self::Float(left), Self::Float(right)) => left.operate(operator, right).map(Self::Float),
            (Self::Integer(left), Self::Float(right)) => {
                (left as f64).operate(operator, right).map(Self::Float)
            }
            (Self::Float(left), Self::Integer(right)) => {
                left.operate(operator, &(*right as f64)).map(Self::Float)
            }
            (Self::Text(left), Self::Text(right)) => left.operate(operator, right).map(Self::Text),
            (Self::List(mut left), Self::List(right)) if operator == Operator::Add => {
                left.extend(right.iter().cloned());
                Ok(Self::List(left))
            }
            (left, right) => Err(EnumerableError::UndefinedOperator {
                operator,
                operand: if left.kind() == right.kind() {
                    left.kind()
                } else {
                    "mixed operands"
                },
            }),
        }
    }
}
