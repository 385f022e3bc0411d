// File: crates/antrieb-core/src/selection.rs
// Summary: Per-series highlight flags toggled from the legend.

use std::collections::HashMap;

use tracing::debug;

/// Series name → highlighted. Names never toggled read as unselected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    flags: HashMap<String, bool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `name` and return its new value.
    pub fn toggle(&mut self, name: &str) -> bool {
        let flag = self.flags.entry(name.to_string()).or_insert(false);
        *flag = !*flag;
        debug!(series = name, selected = *flag, "toggled series");
        *flag
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn selected_count(&self) -> usize {
        self.flags.values().filter(|&&v| v).count()
    }

    /// Selected names, sorted for stable output.
    pub fn selected_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.flags.iter().filter(|(_, &v)| v).map(|(k, _)| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}
