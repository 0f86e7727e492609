use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PreprocessError;

/// Target architecture of the input program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "MIPS")]
    Mips,
    /// Accepted placeholder; expands every line to nothing.
    #[serde(rename = "ARM")]
    Arm,
}

impl FromStr for Mode {
    type Err = PreprocessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIPS" => Ok(Mode::Mips),
            "ARM" => Ok(Mode::Arm),
            other => Err(PreprocessError::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Mips => "MIPS",
            Mode::Arm => "ARM",
        })
    }
}

/// Which register the second instruction of a compare-and-branch tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchCompare {
    /// `slt $at, a, b` / `beq a, $zero, L`: the branch re-tests the first
    /// source operand and leaves `$at` unread.
    #[default]
    Verbatim,
    /// `slt $at, a, b` / `beq $at, $zero, L`.
    ConsumeAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    pub mode: Mode,
    pub branch_compare: BranchCompare,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Mips,
            branch_compare: BranchCompare::Verbatim,
        }
    }
}

impl ExpandConfig {
    pub fn new(mode: Mode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
