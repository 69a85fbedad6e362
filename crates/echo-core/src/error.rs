/// Rejected input at the parameter boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("{name} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("unknown mode: {0}")]
    UnknownMode(String),
    #[error("unknown measurement tool: {0}")]
    UnknownTool(String),
}
