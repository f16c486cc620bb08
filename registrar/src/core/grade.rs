//! Letter-grade scale.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Letter grade with an associated grade-point value.
///
/// Pure lookup table; nothing here aggregates grades into a GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade-point value on the 10-point scale.
    #[must_use]
    pub fn grade_point(self) -> f64 {
        match self {
            Grade::S => 10.0,
            Grade::A => 9.0,
            Grade::B => 8.0,
            Grade::C => 7.0,
            Grade::D => 6.0,
            Grade::F => 0.0,
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Grade::S),
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => Err(format!("unknown grade symbol '{other}'")),
        }
    }
}
