//! Compile option flags.

use std::ops::{BitOr, BitOrAssign};

/// Bit flags controlling statement rendering.
///
/// Flags travel with the render context into nested expressions;
/// the separator and trailing newline apply once per statement, in
/// `build`, never inside nested renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions(u8);

impl CompileOptions {
    /// Compact single-line output, no separator.
    pub const NONE: Self = Self(0);
    /// One clause per line.
    pub const FORMAT: Self = Self(1);
    /// Append `;` after the statement.
    pub const APPEND_SEPARATOR: Self = Self(1 << 1);
    /// Append a newline after the statement (after the separator).
    pub const TRAILING_NEWLINE: Self = Self(1 << 2);

    /// True when every flag in `flags` is set.
    pub fn contains(self, flags: Self) -> bool {
        self.0 & flags.0 == flags.0
    }

    /// A copy with the given flags cleared.
    pub fn without(self, flags: Self) -> Self {
        Self(self.0 & !flags.0)
    }

    pub(crate) fn apply_tail(self, buf: &mut String) {
        if self.contains(Self::APPEND_SEPARATOR) {
            buf.push(';');
        }
        if self.contains(Self::TRAILING_NEWLINE) {
            buf.push('\n');
        }
    }
}

impl BitOr for CompileOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CompileOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
