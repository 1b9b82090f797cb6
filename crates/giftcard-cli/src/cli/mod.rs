mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

pub use commands::{build_cli, build_gcasm_cli};
pub use dispatch::{AsmParams, ReadParams};

/// Output mode for the reader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl OutputMode {
    /// Accepts both the numeric form (`1`, `2`) and the name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1" | "text" => Some(Self::Text),
            "2" | "json" => Some(Self::Json),
            _ => None,
        }
    }
}
