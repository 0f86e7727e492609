pub mod config;
pub mod error;
pub mod expand;
pub mod imm;
pub mod instruction;
pub mod labels;
pub mod normalize;
pub mod pseudo;

pub use config::{BranchCompare, ExpandConfig, Mode};
pub use error::PreprocessError;
pub use expand::{preprocess, Expander};
pub use instruction::Instruction;
pub use labels::label_positions;
pub use normalize::clean;
pub use pseudo::Pseudo;
