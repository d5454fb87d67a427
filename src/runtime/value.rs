use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Runtime value representation
///
/// Vectors share their storage between clones. `+` and `*` consume the left
/// operand and only write into its storage when nothing else holds it, so a
/// variable never changes because of a value derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 64-bit integer value
    Integer(i64),
    /// Flat vector of integers (reference-counted)
    Vector(Arc<Vec<i64>>),
    /// String value, only produced by string literals
    Text(String),
}

impl Value {
    /// Creates a vector value from its elements
    pub fn vector(elements: Vec<i64>) -> Self {
        Value::Vector(Arc::new(elements))
    }

    /// Type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Vector(_) => "vector",
            Value::Text(_) => "text",
        }
    }

    /// Returns the vector elements, if this is a vector
    pub fn as_slice(&self) -> Option<&[i64]> {
        match self {
            Value::Vector(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// `+`: append an integer to a vector, or concatenate two vectors
    ///
    /// Any other combination is an [`Error::InvalidOperation`]. `max_len`
    /// bounds the length of the result.
    pub fn add(self, rhs: &Value, max_len: usize) -> Result<Value> {
        match (self, rhs) {
            (Value::Vector(mut left), Value::Integer(n)) => {
                check_len(left.len().saturating_add(1), max_len)?;
                Arc::make_mut(&mut left).push(*n);
                Ok(Value::Vector(left))
            }
            (Value::Vector(mut left), Value::Vector(right)) => {
                check_len(left.len().saturating_add(right.len()), max_len)?;
                Arc::make_mut(&mut left).extend_from_slice(right);
                Ok(Value::Vector(left))
            }
            (lhs, _) => Err(Error::invalid_operation(
                "+",
                lhs.type_name(),
                rhs.type_name(),
            )),
        }
    }

    /// `*`: scale a vector by an integer, or take the Cartesian product of
    /// two vectors (outer loop over `self`, inner loop over `rhs`)
    ///
    /// Any other combination, including integer by integer, is an
    /// [`Error::InvalidOperation`].
    pub fn multiply(self, rhs: &Value, max_len: usize) -> Result<Value> {
        match (self, rhs) {
            (Value::Vector(mut left), Value::Integer(k)) => {
                check_len(left.len(), max_len)?;
                for x in Arc::make_mut(&mut left).iter_mut() {
                    *x = checked_mul(*x, *k)?;
                }
                Ok(Value::Vector(left))
            }
            (Value::Vector(left), Value::Vector(right)) => {
                check_len(left.len().saturating_mul(right.len()), max_len)?;
                let mut out = Vec::with_capacity(left.len() * right.len());
                for x in left.iter() {
                    for y in right.iter() {
                        out.push(checked_mul(*x, *y)?);
                    }
                }
                Ok(Value::vector(out))
            }
            (lhs, _) => Err(Error::invalid_operation(
                "*",
                lhs.type_name(),
                rhs.type_name(),
            )),
        }
    }
}

fn checked_mul(x: i64, y: i64) -> Result<i64> {
    x.checked_mul(y).ok_or_else(|| Error::IntegerOverflow {
        op: format!("{} * {}", x, y),
    })
}

fn check_len(len: usize, limit: usize) -> Result<()> {
    if len > limit {
        return Err(Error::VectorTooLarge { len, limit });
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Vector(elements) => {
                write!(f, "[")?;
                for (i, n) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", n)?;
                }
                write!(f, "]")
            }
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
