//! Error types.
//!
//! Pixel effects and the blit driver can not fail. Errors only arise when constructing values from external input.

use std::fmt::{Display, Formatter};

/// An error when creating a surface.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SurfaceError {
    /// The provided dimensions are negative.
    InvalidDimensions {
        width: i32,
        height: i32,
    },
    /// The provided pixel data does not match the dimensions.
    DataLength {
        /// The number of pixels required by the dimensions.
        expected: usize,
        /// The number of pixels provided.
        actual: usize,
    },
}

impl Display for SurfaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid surface dimensions {}x{}.", width, height)
            }
            Self::DataLength { expected, actual } => {
                write!(f, "Expected {} pixels of surface data, but got {}.", expected, actual)
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// An error when parsing a [`Color`](crate::color::Color) from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColorParseError {
    /// The input does not have 6 hex digits. Contains the actual number of characters.
    InvalidLength(usize),
    /// The input contains characters that are not hex digits.
    InvalidDigits(String),
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "Expected 6 hex digits (RRGGBB), but got {} characters.", len),
            Self::InvalidDigits(digits) => write!(f, "Invalid hex digits: {}.", digits),
        }
    }
}

impl std::error::Error for ColorParseError {}
