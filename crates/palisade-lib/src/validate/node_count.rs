use palisade_core::LimitsConfig;
use tracing::debug;

use crate::parser::ast::Field;
use crate::{Error, ErrorKind, Result};

/// Counts field selections during validation and aborts the traversal once
/// there are more than the ceiling.
///
/// The abort is an [`Error`], never a collected finding.
#[derive(Debug, Clone)]
pub struct NodeCountGuard {
    count: u32,
    max_nodes: u32,
}

impl NodeCountGuard {
    /// `None` when the node check is disabled.
    pub fn new(limits: &LimitsConfig) -> Option<Self> {
        limits.node_ceiling().map(Self::with_max)
    }

    pub fn with_max(max_nodes: u32) -> Self {
        Self {
            count: 0,
            max_nodes,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn check_field(&mut self, field: &Field) -> Result<()> {
        self.count += 1;
        if self.count <= self.max_nodes {
            return Ok(());
        }

        debug!(max_nodes = self.max_nodes, "validation aborted");
        let err = Error::new(
            ErrorKind::NodeCountExceeded,
            format!(
                "Validation aborted: too many nodes (max is {})",
                self.max_nodes
            ),
        );
        Err(match field.name() {
            Some(name) => err.with_offending_text(name.text()),
            None => err,
        })
    }
}
