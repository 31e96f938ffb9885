// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Operations
//!
//! The taxonomy of everything a checked integer can do: unary and binary
//! operators, compound assignments, comparisons, and the conversion path
//! (construction and assignment from another width).

use std::fmt;

/// An operator or conversion applied to a checked integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operation {
    /// Unary `+`.
    UnaryPlus,
    /// Unary `-`.
    UnaryMinus,
    /// Bitwise complement, `~` in C and `!` in Rust.
    BitwiseNot,
    /// `++x`.
    PreIncrement,
    /// `x++`.
    PostIncrement,
    /// `--x`.
    PreDecrement,
    /// `x--`.
    PostDecrement,
    /// `a + b`.
    Add,
    /// `a - b`.
    Subtract,
    /// `a * b`.
    Multiply,
    /// `a / b`.
    Divide,
    /// `a % b`.
    Remainder,
    /// `a & b`.
    BitwiseAnd,
    /// `a | b`.
    BitwiseOr,
    /// `a ^ b`.
    BitwiseXor,
    /// `a << b`.
    ShiftLeft,
    /// `a >> b`.
    ShiftRight,
    /// `a += b`.
    AddAssign,
    /// `a -= b`.
    SubtractAssign,
    /// `a *= b`.
    MultiplyAssign,
    /// `a /= b`.
    DivideAssign,
    /// `a %= b`.
    RemainderAssign,
    /// `a &= b`.
    BitwiseAndAssign,
    /// `a |= b`.
    BitwiseOrAssign,
    /// `a ^= b`.
    BitwiseXorAssign,
    /// `a <<= b`.
    ShiftLeftAssign,
    /// `a >>= b`.
    ShiftRightAssign,
    /// `a == b`.
    Equal,
    /// `a != b`.
    NotEqual,
    /// `a < b`.
    Less,
    /// `a <= b`.
    LessEqual,
    /// `a > b`.
    Greater,
    /// `a >= b`.
    GreaterEqual,
    /// Construction from a value of another kind.
    Construct,
    /// Assignment from a value of another kind.
    Assign,
    /// Construction without a value.
    DefaultConstruct,
}

impl Operation {
    /// Returns the number of operands the operation reads.
    ///
    /// Compound assignments read both sides. The conversion path reads only
    /// its source, and default construction reads nothing.
    pub const fn arity(self) -> u8 {
        match self {
            Operation::DefaultConstruct => 0,
            Operation::UnaryPlus
            | Operation::UnaryMinus
            | Operation::BitwiseNot
            | Operation::PreIncrement
            | Operation::PostIncrement
            | Operation::PreDecrement
            | Operation::PostDecrement
            | Operation::Construct
            | Operation::Assign => 1,
            _ => 2,
        }
    }

    /// Returns the C spelling of the operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::UnaryPlus | Operation::Add => "+",
            Operation::UnaryMinus | Operation::Subtract => "-",
            Operation::BitwiseNot => "~",
            Operation::PreIncrement | Operation::PostIncrement => "++",
            Operation::PreDecrement | Operation::PostDecrement => "--",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Remainder => "%",
            Operation::BitwiseAnd => "&",
            Operation::BitwiseOr => "|",
            Operation::BitwiseXor => "^",
            Operation::ShiftLeft => "<<",
            Operation::ShiftRight => ">>",
            Operation::AddAssign => "+=",
            Operation::SubtractAssign => "-=",
            Operation::MultiplyAssign => "*=",
            Operation::DivideAssign => "/=",
            Operation::RemainderAssign => "%=",
            Operation::BitwiseAndAssign => "&=",
            Operation::BitwiseOrAssign => "|=",
            Operation::BitwiseXorAssign => "^=",
            Operation::ShiftLeftAssign => "<<=",
            Operation::ShiftRightAssign => ">>=",
            Operation::Equal => "==",
            Operation::NotEqual => "!=",
            Operation::Less => "<",
            Operation::LessEqual => "<=",
            Operation::Greater => ">",
            Operation::GreaterEqual => ">=",
            Operation::Construct => "T(x)",
            Operation::Assign => "=",
            Operation::DefaultConstruct => "T()",
        }
    }

    /// Returns the snake_case name of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::UnaryPlus => "unary_plus",
            Operation::UnaryMinus => "unary_minus",
            Operation::BitwiseNot => "bitwise_not",
            Operation::PreIncrement => "pre_increment",
            Operation::PostIncrement => "post_increment",
            Operation::PreDecrement => "pre_decrement",
            Operation::PostDecrement => "post_decrement",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Remainder => "remainder",
            Operation::BitwiseAnd => "bitwise_and",
            Operation::BitwiseOr => "bitwise_or",
            Operation::BitwiseXor => "bitwise_xor",
            Operation::ShiftLeft => "shift_left",
            Operation::ShiftRight => "shift_right",
            Operation::AddAssign => "add_assign",
            Operation::SubtractAssign => "subtract_assign",
            Operation::MultiplyAssign => "multiply_assign",
            Operation::DivideAssign => "divide_assign",
            Operation::RemainderAssign => "remainder_assign",
            Operation::BitwiseAndAssign => "bitwise_and_assign",
            Operation::BitwiseOrAssign => "bitwise_or_assign",
            Operation::BitwiseXorAssign => "bitwise_xor_assign",
            Operation::ShiftLeftAssign => "shift_left_assign",
            Operation::ShiftRightAssign => "shift_right_assign",
            Operation::Equal => "equal",
            Operation::NotEqual => "not_equal",
            Operation::Less => "less",
            Operation::LessEqual => "less_equal",
            Operation::Greater => "greater",
            Operation::GreaterEqual => "greater_equal",
            Operation::Construct => "construct",
            Operation::Assign => "assign",
            Operation::DefaultConstruct => "default_construct",
        }
    }

    /// Returns `true` for the comparisons, which yield a plain `bool`.
    #[inline(always)]
    pub const fn produces_bool(self) -> bool {
        matches!(
            self,
            Operation::Equal
                | Operation::NotEqual
                | Operation::Less
                | Operation::LessEqual
                | Operation::Greater
                | Operation::GreaterEqual
        )
    }

    /// Returns `true` for the compound assignments.
    #[inline(always)]
    pub const fn is_compound(self) -> bool {
        !self.base().same_as(self)
    }

    /// Returns `true` for the two shift operators and their compound forms.
    #[inline(always)]
    pub const fn is_shift(self) -> bool {
        matches!(self.base(), Operation::ShiftLeft | Operation::ShiftRight)
    }

    /// Returns `true` for construction, assignment and default construction.
    #[inline(always)]
    pub const fn is_conversion(self) -> bool {
        matches!(
            self,
            Operation::Construct | Operation::Assign | Operation::DefaultConstruct
        )
    }

    /// Maps a compound assignment to its binary operator. Every other
    /// operation maps to itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use saferint_checked::operation::Operation;
    /// assert_eq!(Operation::ShiftLeftAssign.base(), Operation::ShiftLeft);
    /// assert_eq!(Operation::Add.base(), Operation::Add);
    /// ```
    pub const fn base(self) -> Operation {
        match self {
            Operation::AddAssign => Operation::Add,
            Operation::SubtractAssign => Operation::Subtract,
            Operation::MultiplyAssign => Operation::Multiply,
            Operation::DivideAssign => Operation::Divide,
            Operation::RemainderAssign => Operation::Remainder,
            Operation::BitwiseAndAssign => Operation::BitwiseAnd,
            Operation::BitwiseOrAssign => Operation::BitwiseOr,
            Operation::BitwiseXorAssign => Operation::BitwiseXor,
            Operation::ShiftLeftAssign => Operation::ShiftLeft,
            Operation::ShiftRightAssign => Operation::ShiftRight,
            other => other,
        }
    }

    #[inline(always)]
    const fn same_as(self, other: Operation) -> bool {
        self as u8 == other as u8
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_operations_map_to_binary() {
        let pairs = [
            (Operation::AddAssign, Operation::Add),
            (Operation::SubtractAssign, Operation::Subtract),
            (Operation::MultiplyAssign, Operation::Multiply),
            (Operation::DivideAssign, Operation::Divide),
            (Operation::RemainderAssign, Operation::Remainder),
            (Operation::BitwiseAndAssign, Operation::BitwiseAnd),
            (Operation::BitwiseOrAssign, Operation::BitwiseOr),
            (Operation::BitwiseXorAssign, Operation::BitwiseXor),
            (Operation::ShiftLeftAssign, Operation::ShiftLeft),
            (Operation::ShiftRightAssign, Operation::ShiftRight),
        ];
        for (compound, binary) in pairs {
            assert_eq!(compound.base(), binary);
            assert!(compound.is_compound());
            assert!(!binary.is_compound());
            assert_eq!(compound.arity(), 2);
            assert!(compound.symbol().ends_with('='));
            assert!(compound.symbol().starts_with(binary.symbol()));
            assert!(compound.name().starts_with(binary.name()));
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operation::DefaultConstruct.arity(), 0);
        assert_eq!(Operation::UnaryMinus.arity(), 1);
        assert_eq!(Operation::PostDecrement.arity(), 1);
        assert_eq!(Operation::Construct.arity(), 1);
        assert_eq!(Operation::Remainder.arity(), 2);
        assert_eq!(Operation::GreaterEqual.arity(), 2);
    }

    #[test]
    fn test_only_comparisons_produce_bool() {
        assert!(Operation::Equal.produces_bool());
        assert!(Operation::LessEqual.produces_bool());
        assert!(!Operation::Add.produces_bool());
        assert!(!Operation::AddAssign.produces_bool());
        assert!(!Operation::Construct.produces_bool());
    }

    #[test]
    fn test_classification() {
        assert!(Operation::ShiftRightAssign.is_shift());
        assert!(!Operation::BitwiseXor.is_shift());
        assert!(Operation::Assign.is_conversion());
        assert!(!Operation::AddAssign.is_conversion());
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::BitwiseXorAssign.to_string(), "bitwise_xor_assign");
        assert_eq!(Operation::UnaryMinus.symbol(), "-");
    }
}
