//! Declarative per-state definitions.

use crate::core::Handler;
use std::sync::Arc;

/// Declarative definition of one state: its name, event bindings, and
/// nested children. Consumed by
/// [`ChartBuilder`](crate::builder::ChartBuilder).
pub struct StateDef {
    pub(super) name: String,
    pub(super) handlers: Vec<(String, Handler)>,
    pub(super) children: Vec<StateDef>,
}

impl StateDef {
    /// Start a definition for a state named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Bind `action` to `event` on this state.
    ///
    /// Repeated bindings for the same event follow the chart's last-wins
    /// overwrite semantics.
    pub fn on<F>(mut self, event: impl Into<String>, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.handlers.push((event.into(), Arc::new(action)));
        self
    }

    /// Nest `child` under this state.
    pub fn child(mut self, child: StateDef) -> Self {
        self.children.push(child);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn def_accumulates_bindings_and_children() {
        let def = StateDef::new("App")
            .on("back", || {})
            .on("quit", || {})
            .child(StateDef::new("Menu"));

        assert_eq!(def.name, "App");
        assert_eq!(def.handlers.len(), 2);
        assert_eq!(def.children.len(), 1);
        assert_eq!(def.children[0].name, "Menu");
    }
}
