use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use asmsim_rs::{clean, label_positions, ExpandConfig, Expander, Mode};

const EXAMPLE: &str = ".text\n\nmain:\n  li $t1, 5\n  li $t2, 0x3BF20\n";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Expand MIPS pseudo-instructions into real instructions"
)]
struct Opts {
    /// Assembly source, one instruction per line (default: built-in example)
    #[arg(value_name = "ASMFILE")]
    input: Option<String>,
    /// Target mode: MIPS or ARM
    #[arg(long)]
    mode: Option<String>,
    /// JSON expansion config ({ "mode", "branch_compare" })
    #[arg(long, value_name = "FILE")]
    config: Option<String>,
    /// Also report label positions of the source or the expanded stream
    #[arg(long, value_enum, default_value_t = LabelsFrom::None)]
    labels: LabelsFrom,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LabelsFrom { None, Source, Expanded }

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Debug, Clone, Serialize)]
struct LabelKV { name: String, line: usize }

#[derive(Debug, Clone, Serialize)]
struct Report { lines: Vec<String>, labels: Vec<LabelKV> }

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    let mut cfg = match &opts.config {
        Some(path) => {
            let txt = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
            ExpandConfig::from_json(&txt).with_context(|| format!("parsing config {path}"))?
        }
        None => ExpandConfig::default(),
    };
    if let Some(mode) = &opts.mode {
        cfg.mode = mode.parse::<Mode>()?;
    }

    let source = match &opts.input {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?,
        None => EXAMPLE.to_string(),
    };
    let program = clean(source.lines());
    let lines = Expander::new(cfg).expand(&program)?;

    let labels = match opts.labels {
        LabelsFrom::None => Vec::new(),
        LabelsFrom::Source => sorted_labels(&program),
        LabelsFrom::Expanded => sorted_labels(&lines),
    };

    let rendered = match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&Report { lines, labels })? + "\n",
        OutputFormat::Text => {
            let mut buf = String::new();
            for l in &lines {
                buf.push_str(l);
                buf.push('\n');
            }
            if !labels.is_empty() {
                buf.push_str("\nLabels:\n");
                for kv in &labels {
                    buf.push_str(&format!("  {:<16} {}\n", kv.name, kv.line));
                }
            }
            buf
        }
    };
    if let Some(path) = &opts.out {
        std::fs::write(path, rendered).with_context(|| format!("writing {path}"))?;
    } else {
        print!("{rendered}");
    }
    Ok(())
}

fn sorted_labels(lines: &[String]) -> Vec<LabelKV> {
    let mut v: Vec<LabelKV> = label_positions(lines)
        .into_iter()
        .map(|(name, line)| LabelKV { name, line })
        .collect();
    v.sort_by(|a, b| a.line.cmp(&b.line).then_with(|| a.name.cmp(&b.name)));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn example_program_expands() {
        let program = clean(EXAMPLE.lines());
        let lines = Expander::default().expand(&program).unwrap();
        assert_eq!(
            lines,
            vec![".text", "main:", "addiu $t1, $zero, 5", "lui $t2, 0x3", "ori $t2, $t2, 0xBF20"]
        );
    }

    #[test]
    fn labels_sorted_by_line() {
        let lines: Vec<String> = ["b:", "nop", "a:", "c:"].iter().map(|s| s.to_string()).collect();
        let got: Vec<(String, usize)> = sorted_labels(&lines).into_iter().map(|kv| (kv.name, kv.line)).collect();
        assert_eq!(got, vec![("b".to_string(), 0), ("a".to_string(), 2), ("c".to_string(), 3)]);
    }
}
