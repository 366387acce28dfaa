//! Operand model for print-style formatting
//!
//! `log` and `logln` take a list of heterogeneous operands. Their joining
//! rules depend on whether an operand is text:
//!
//! - [`sprint`] inserts a space between two neighbours only when neither of
//!   them is text, so `"a", 1, 2, "b"` becomes `a1 2b`.
//! - [`sprintln`] always separates operands with one space and appends a
//!   newline.

use std::borrow::Cow;
use std::fmt::{self, Write};

/// A value that can be passed to the print-style log operations.
pub trait Operand: fmt::Display {
    /// Whether this operand is string-like.
    fn is_text(&self) -> bool {
        false
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

impl<T: Operand + ?Sized> Operand for Box<T> {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

impl Operand for str {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for String {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for Cow<'_, str> {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for fmt::Arguments<'_> {
    fn is_text(&self) -> bool {
        true
    }
}

macro_rules! impl_value_operand {
    ($($t:ty),* $(,)?) => {
        $(impl Operand for $t {})*
    };
}

impl_value_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Join operands print-style.
pub fn sprint(args: &[&dyn Operand]) -> String {
    let mut out = String::new();
    let mut prev_text = false;
    for (idx, arg) in args.iter().enumerate() {
        let is_text = arg.is_text();
        if idx > 0 && !is_text && !prev_text {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
        prev_text = is_text;
    }
    out
}

/// Join operands with single spaces and a trailing newline.
pub fn sprintln(args: &[&dyn Operand]) -> String {
    let mut out = String::new();
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out.push('\n');
    out
}
