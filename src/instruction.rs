use std::fmt;

/// One assembly line split into a mnemonic and up to three operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub operation: String,
    pub operand0: Option<String>,
    pub operand1: Option<String>,
    pub operand2: Option<String>,
}

impl Instruction {
    pub fn from_slots(operation: &str, [a, b, c]: [Option<&str>; 3]) -> Self {
        Self {
            operation: operation.to_string(),
            operand0: a.map(String::from),
            operand1: b.map(String::from),
            operand2: c.map(String::from),
        }
    }

    /// Tokenize a normalized line. Never fails: text past the second comma is
    /// kept verbatim in `operand2`, and empty operand slots become `None`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (operation, rest) = match line.split_once(char::is_whitespace) {
            Some((op, rest)) => (op, rest.trim()),
            None => (line, ""),
        };
        let slot = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        let mut parts = rest.splitn(3, ',');
        Self {
            operation: operation.to_string(),
            operand0: slot(parts.next()),
            operand1: slot(parts.next()),
            operand2: slot(parts.next()),
        }
    }

    pub fn operands(&self) -> impl Iterator<Item = &str> {
        [&self.operand0, &self.operand1, &self.operand2]
            .into_iter()
            .filter_map(|o| o.as_deref())
    }

    pub fn operand_count(&self) -> usize {
        self.operands().count()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.operation)?;
        for (i, op) in self.operands().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{op}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_three_operands() {
        let i = Instruction::parse("add $t0, $t1,$t2");
        assert_eq!(i.operation, "add");
        assert_eq!(i.operand0.as_deref(), Some("$t0"));
        assert_eq!(i.operand1.as_deref(), Some("$t1"));
        assert_eq!(i.operand2.as_deref(), Some("$t2"));
        assert_eq!(i.to_string(), "add $t0, $t1, $t2");
    }

    #[test]
    fn parse_bare_mnemonic_and_label() {
        let i = Instruction::parse("noop");
        assert_eq!(i, Instruction::from_slots("noop", [None, None, None]));
        assert_eq!(i.to_string(), "noop");

        let l = Instruction::parse("main:");
        assert_eq!(l.operation, "main:");
        assert_eq!(l.operand_count(), 0);
    }

    #[test]
    fn parse_keeps_extra_operands_in_last_slot() {
        let i = Instruction::parse("foo a, b, c, d");
        assert_eq!(i.operand2.as_deref(), Some("c, d"));
        assert_eq!(i.to_string(), "foo a, b, c, d");
    }

    #[test]
    fn parse_then_render_is_canonical() {
        assert_eq!(Instruction::parse("add $t0,$t1,$t2").to_string(), "add $t0, $t1, $t2");
        assert_eq!(Instruction::parse("sw   $t0 ,  0x4($sp)").to_string(), "sw $t0, 0x4($sp)");
        assert_eq!(Instruction::parse("main:").to_string(), "main:");
    }

    #[test]
    fn parse_tab_separated_and_empty_slots() {
        let i = Instruction::parse("li\t$t1,  0x5");
        assert_eq!(i, Instruction::from_slots("li", [Some("$t1"), Some("0x5"), None]));

        let j = Instruction::parse("jr $ra,");
        assert_eq!(j, Instruction::from_slots("jr", [Some("$ra"), None, None]));
    }

    #[test]
    fn render_omits_absent_operands() {
        assert_eq!(Instruction::from_slots("bgezal", [Some("$zero"), Some("f"), None]).to_string(), "bgezal $zero, f");
        assert_eq!(Instruction::from_slots("beq", [None, Some("$zero"), Some("L")]).to_string(), "beq $zero, L");
        assert_eq!(Instruction::from_slots("mflo", [Some("$t0"), None, None]).to_string(), "mflo $t0");
        assert_eq!(Instruction::from_slots("mult", [Some("$t1"), Some("$t2"), None]).to_string(), "mult $t1, $t2");
        assert_eq!(Instruction::from_slots("sll", [Some("$zero"), Some("$zero"), Some("0x0")]).to_string(), "sll $zero, $zero, 0x0");
    }
}
