//! Journal assembly: fragment concatenation and boundary grouping.

#[cfg(test)]
mod tests_assembly;

use std::collections::BTreeMap;

use crate::compile::CompiledSurface;
use crate::script::{CadEntityId, Command, Script};

/// Accumulates per-surface fragments in traversal order.
///
/// Fragments are never reordered or deduplicated; command order is part of
/// the contract, since later commands reference ids captured by earlier
/// ones. Boundary group commands are batched at the end so all ids for a
/// given tag land in one group command.
#[derive(Debug, Default)]
pub struct ScriptAssembler {
    script: Script,
    groups: BTreeMap<String, Vec<CadEntityId>>,
}

impl ScriptAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one compiled surface's fragment, recording its surviving id
    /// for boundary annotation. Transmission boundaries are not annotated.
    pub fn push(&mut self, compiled: CompiledSurface) {
        if let Some(group) = compiled.boundary.group_name() {
            self.groups.entry(group).or_default().push(compiled.result);
        }
        self.script.append(compiled.script);
    }

    /// Finish the journal: fragments in push order, then one group command
    /// per boundary tag.
    pub fn finish(mut self) -> Script {
        for (group, ids) in self.groups {
            self.script.push(Command::AddToGroup { group, ids });
        }
        self.script
    }
}
