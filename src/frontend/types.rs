//! The KPL type model.
//!
//! KPL has two basic types, `Int` and `Char`, and array types built from a
//! compile-time size and an element type. Type equality is structural:
//! `Arr(10, Int)` written in two places is one and the same type. Types are
//! value objects with no identity, so duplication is a plain `clone`.

use std::fmt;

/// A KPL type. Structural equality via `PartialEq`, deep duplication via
/// `Clone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Char,
    Array { size: i64, element: Box<Type> },
}

impl Type {
    /// Convenience constructor for array types.
    pub fn array(size: i64, element: Type) -> Self {
        Type::Array {
            size,
            element: Box::new(element),
        }
    }

    /// `Int` and `Char` are basic; arrays are not.
    pub fn is_basic(&self) -> bool {
        matches!(self, Type::Int | Type::Char)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "Int"),
            Type::Char => write!(f, "Char"),
            Type::Array { size, element } => write!(f, "Arr({size},{element})"),
        }
    }
}

/// The value of a named constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantValue {
    Int(i64),
    Char(char),
}

impl ConstantValue {
    /// The type a constant of this value has.
    pub fn ty(&self) -> Type {
        match self {
            ConstantValue::Int(_) => Type::Int,
            ConstantValue::Char(_) => Type::Char,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(i) => write!(f, "{i}"),
            ConstantValue::Char(c) => write!(f, "'{c}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Type::array(10, Type::Int);
        let b = Type::array(10, Type::Int);
        assert_eq!(a, b);
    }

    #[test]
    fn test_structural_inequality() {
        assert_ne!(Type::Int, Type::Char);
        assert_ne!(Type::array(10, Type::Int), Type::array(11, Type::Int));
        assert_ne!(Type::array(10, Type::Int), Type::array(10, Type::Char));
        assert_ne!(Type::array(10, Type::Int), Type::Int);
    }

    #[test]
    fn test_nested_arrays() {
        let a = Type::array(3, Type::array(5, Type::Char));
        let b = Type::array(3, Type::array(5, Type::Char));
        assert_eq!(a, b);
        assert_ne!(a, Type::array(3, Type::array(5, Type::Int)));
    }

    #[test]
    fn test_duplication_is_deep() {
        let original = Type::array(4, Type::array(2, Type::Int));
        let copy = original.clone();
        assert_eq!(original, copy);
        // Mutating the copy must not affect the original.
        let mut copy = copy;
        if let Type::Array { size, .. } = &mut copy {
            *size = 99;
        }
        assert_ne!(original, copy);
    }

    #[test]
    fn test_is_basic() {
        assert!(Type::Int.is_basic());
        assert!(Type::Char.is_basic());
        assert!(!Type::array(1, Type::Int).is_basic());
    }

    #[test]
    fn test_display() {
        assert_eq!(Type::Int.to_string(), "Int");
        assert_eq!(Type::Char.to_string(), "Char");
        assert_eq!(Type::array(10, Type::Int).to_string(), "Arr(10,Int)");
        assert_eq!(
            Type::array(2, Type::array(3, Type::Char)).to_string(),
            "Arr(2,Arr(3,Char))"
        );
    }

    #[test]
    fn test_constant_value_type() {
        assert_eq!(ConstantValue::Int(42).ty(), Type::Int);
        assert_eq!(ConstantValue::Char('a').ty(), Type::Char);
    }

    #[test]
    fn test_constant_value_display() {
        assert_eq!(ConstantValue::Int(10).to_string(), "10");
        assert_eq!(ConstantValue::Char('x').to_string(), "'x'");
    }
}
