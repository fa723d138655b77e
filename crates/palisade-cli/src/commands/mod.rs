pub mod check;
pub mod cst;
pub mod events;
pub mod source_loader;

#[cfg(test)]
mod source_loader_tests;

use std::path::PathBuf;

use palisade_core::{LimitsConfig, SourceAggregate};

/// Input and limits shared by every command.
pub struct InputArgs {
    pub files: Vec<PathBuf>,
    pub query_text: Option<String>,
    pub limits: LimitsConfig,
    pub color: bool,
}

impl InputArgs {
    /// Loads the document, printing the failure to stderr.
    pub fn load(&self) -> Option<SourceAggregate> {
        match source_loader::load_source(&self.files, self.query_text.as_deref()) {
            Ok(source) => Some(source),
            Err(msg) => {
                eprintln!("error: {}", msg);
                None
            }
        }
    }
}
