use tracing::{debug, trace, warn};

use crate::config::{BranchCompare, ExpandConfig, Mode};
use crate::error::PreprocessError;
use crate::imm::ImmError;
use crate::instruction::Instruction;
use crate::pseudo::Pseudo;

/// Lowers one source line into the real instructions of a target.
pub trait Target {
    fn lower(&self, line: &str) -> Result<Vec<String>, ImmError>;
}

pub struct MipsTarget {
    pub branch_compare: BranchCompare,
}

impl Target for MipsTarget {
    fn lower(&self, line: &str) -> Result<Vec<String>, ImmError> {
        let instr = Instruction::parse(line);
        let Some(pseudo) = Pseudo::recognize(&instr) else {
            trace!(line, "pass through");
            return Ok(vec![instr.to_string()]);
        };
        let real = pseudo.expand(&instr, self.branch_compare)?;
        debug!(pseudo = pseudo.mnemonic(), emitted = real.len(), "expanded {line:?}");
        Ok(real.iter().map(ToString::to_string).collect())
    }
}

/// Placeholder: ARM lowering is not defined, every line yields nothing.
pub struct ArmTarget;

impl Target for ArmTarget {
    fn lower(&self, _line: &str) -> Result<Vec<String>, ImmError> {
        Ok(Vec::new())
    }
}

/// Line-by-line expansion driver. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expander {
    cfg: ExpandConfig,
}

impl Expander {
    pub fn new(cfg: ExpandConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &ExpandConfig {
        &self.cfg
    }

    /// Expand a single normalized line.
    pub fn expand_line(&self, line: &str) -> Result<Vec<String>, ImmError> {
        match self.cfg.mode {
            Mode::Mips => MipsTarget { branch_compare: self.cfg.branch_compare }.lower(line),
            Mode::Arm => ArmTarget.lower(line),
        }
    }

    /// Expand a normalized program. Stops at the first bad line; there is no
    /// partial result.
    pub fn expand<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<String>, PreprocessError> {
        if self.cfg.mode == Mode::Arm {
            warn!("ARM expansion is not implemented; producing no output");
        }
        let mut processed = Vec::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let real = self
                .expand_line(line)
                .map_err(|source| PreprocessError::MalformedImmediate {
                    line: idx,
                    text: line.to_string(),
                    source,
                })?;
            processed.extend(real);
        }
        debug!(input = lines.len(), output = processed.len(), mode = %self.cfg.mode, "expansion done");
        Ok(processed)
    }
}

/// Expand `lines` for the target named by `mode` (`"MIPS"` or `"ARM"`) with
/// the default branch lowering.
pub fn preprocess<S: AsRef<str>>(lines: &[S], mode: &str) -> Result<Vec<String>, PreprocessError> {
    let mode: Mode = mode.parse()?;
    Expander::new(ExpandConfig::new(mode)).expand(lines)
}
