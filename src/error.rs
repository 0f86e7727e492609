use crate::imm::ImmError;

#[derive(thiserror::Error, Debug)]
pub enum PreprocessError {
    #[error("Unsupported mode {0:?} (expected MIPS or ARM)")]
    UnsupportedMode(String),
    #[error("Malformed immediate on line {line} ({text:?}): {source}")]
    MalformedImmediate {
        line: usize, // index into the normalized input
        text: String,
        #[source]
        source: ImmError,
    },
}
