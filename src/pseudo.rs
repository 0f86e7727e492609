//! MIPS pseudo-instructions and their fixed expansions.
//!
//! Each pseudo-instruction lowers to one or two real instructions. Comparison
//! branches go through `$at`; `mul`/`div`/`rem` read the result back out of
//! `lo`/`hi`; `li`/`la` split constants that do not fit a 16-bit immediate.

use crate::config::BranchCompare;
use crate::imm::{num_lower, num_upper, parse_hex, ImmError, IMM16_LIMIT};
use crate::instruction::Instruction;

const ZERO: Option<&str> = Some("$zero");
const AT: Option<&str> = Some("$at");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pseudo {
    Noop,
    Mov,
    Clear,
    Not,
    La,
    Li,
    Bge,
    Bgt,
    Ble,
    Blt,
    B,
    Bal,
    Blez,
    Bgtu,
    Bgtz,
    Beqz,
    Mul,
    Div,
    Rem,
}

fn real(op: &str, a: Option<&str>, b: Option<&str>, c: Option<&str>) -> Instruction {
    Instruction::from_slots(op, [a, b, c])
}

impl Pseudo {
    pub const ALL: &'static [Pseudo] = &[
        Pseudo::Noop, Pseudo::Mov, Pseudo::Clear, Pseudo::Not, Pseudo::La, Pseudo::Li,
        Pseudo::Bge, Pseudo::Bgt, Pseudo::Ble, Pseudo::Blt, Pseudo::B, Pseudo::Bal,
        Pseudo::Blez, Pseudo::Bgtu, Pseudo::Bgtz, Pseudo::Beqz, Pseudo::Mul, Pseudo::Div,
        Pseudo::Rem,
    ];

    /// Exact, case-sensitive mnemonic lookup.
    pub fn lookup(mnemonic: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.mnemonic() == mnemonic)
    }

    /// The pseudo-instruction `instr` spells, if any. A two-operand `div` is
    /// the real divide and is not recognized.
    pub fn recognize(instr: &Instruction) -> Option<Self> {
        match Self::lookup(&instr.operation)? {
            Pseudo::Div if instr.operand_count() == 2 => None,
            p => Some(p),
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Pseudo::Noop => "noop",
            Pseudo::Mov => "mov",
            Pseudo::Clear => "clear",
            Pseudo::Not => "not",
            Pseudo::La => "la",
            Pseudo::Li => "li",
            Pseudo::Bge => "bge",
            Pseudo::Bgt => "bgt",
            Pseudo::Ble => "ble",
            Pseudo::Blt => "blt",
            Pseudo::B => "b",
            Pseudo::Bal => "bal",
            Pseudo::Blez => "blez",
            Pseudo::Bgtu => "bgtu",
            Pseudo::Bgtz => "bgtz",
            Pseudo::Beqz => "beqz",
            Pseudo::Mul => "mul",
            Pseudo::Div => "div",
            Pseudo::Rem => "rem",
        }
    }

    /// Lower `instr` into real instructions in emission order. Arity is not
    /// checked; a missing operand is simply absent from the output.
    pub fn expand(self, instr: &Instruction, branch: BranchCompare) -> Result<Vec<Instruction>, ImmError> {
        let a = instr.operand0.as_deref();
        let b = instr.operand1.as_deref();
        let c = instr.operand2.as_deref();
        // register the second half of a compare-and-branch tests
        let tested = match branch {
            BranchCompare::Verbatim => a,
            BranchCompare::ConsumeAt => AT,
        };

        let out = match self {
            Pseudo::Noop => vec![real("sll", ZERO, ZERO, Some("0x0"))],
            Pseudo::Mov => vec![real("add", a, b, ZERO)],
            Pseudo::Clear => vec![real("add", a, ZERO, ZERO)],
            Pseudo::Not => vec![real("nor", a, b, ZERO)],
            Pseudo::La | Pseudo::Li => {
                let val = parse_hex(b.unwrap_or_default())?;
                if val < IMM16_LIMIT {
                    vec![real("addiu", a, ZERO, b)]
                } else {
                    let (hi, lo) = (num_upper(val), num_lower(val));
                    vec![
                        real("lui", a, Some(hi.as_str()), None),
                        real("ori", a, a, Some(lo.as_str())),
                    ]
                }
            }
            Pseudo::Bge => vec![real("slt", AT, a, b), real("beq", tested, ZERO, c)],
            Pseudo::Bgt => vec![real("slt", AT, b, a), real("bne", tested, ZERO, c)],
            Pseudo::Ble => vec![real("slt", AT, b, a), real("beq", tested, ZERO, c)],
            Pseudo::Blt => vec![real("slt", AT, a, b), real("bne", tested, ZERO, c)],
            Pseudo::B => vec![real("beq", ZERO, ZERO, a)],
            Pseudo::Bal => vec![real("bgezal", ZERO, a, None)],
            Pseudo::Blez => {
                let jump = match branch {
                    BranchCompare::Verbatim => real("beq", a, b, b),
                    BranchCompare::ConsumeAt => real("beq", AT, ZERO, b),
                };
                vec![real("slt", AT, ZERO, a), jump]
            }
            Pseudo::Bgtu => vec![real("sltu", AT, b, a), real("bne", tested, ZERO, c)],
            Pseudo::Bgtz => {
                let jump = match branch {
                    BranchCompare::Verbatim => real("bne", a, b, b),
                    BranchCompare::ConsumeAt => real("bne", AT, ZERO, b),
                };
                vec![real("slt", AT, ZERO, a), jump]
            }
            Pseudo::Beqz => vec![real("beq", a, ZERO, b)],
            Pseudo::Mul => vec![real("mult", b, c, None), real("mflo", a, None, None)],
            Pseudo::Div => vec![real("div", b, c, None), real("mflo", a, None, None)],
            Pseudo::Rem => vec![real("div", b, c, None), real("mfhi", a, None, None)],
        };
        Ok(out)
    }
}
