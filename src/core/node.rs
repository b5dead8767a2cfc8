//! State node data type.
//!
//! A `StateNode` is a named point in a hierarchical state machine. It holds
//! the node's event handler bindings and the mapping to its named children.
//! Nodes live inside a [`StateChart`](crate::core::StateChart) arena and
//! reference each other by [`StateId`](crate::core::StateId).

use crate::core::chart::StateId;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// A deferred, zero-argument action bound to an event name.
///
/// Handlers capture their environment by move at registration time and are
/// stored behind an `Arc`, so a lookup can hand the caller an invocable clone
/// without borrowing the chart. The `Send + Sync` bounds let a chart move
/// across threads; the chart itself provides no interior synchronization.
pub type Handler = Arc<dyn Fn() + Send + Sync + 'static>;

/// A named state in a hierarchical state machine.
///
/// Each node owns a mapping from event names to [`Handler`]s and a mapping
/// from child names to child ids. The parent link is a non-owning
/// back-reference used by handler lookup to walk up the hierarchy; it is
/// `None` for root states.
///
/// Nodes are created and wired through [`StateChart`](crate::core::StateChart)
/// methods. The accessors here are read views; mutating the hierarchy goes
/// through the chart so the parent/child links stay mutual inverses.
///
/// # Example
///
/// ```rust
/// use statekit::StateChart;
///
/// let mut chart = StateChart::new();
/// let app = chart.add_state("App");
/// let menu = chart.add_child_state(app, "Menu").unwrap();
///
/// let node = chart.node(menu).unwrap();
/// assert_eq!(node.name(), "Menu");
/// assert_eq!(node.parent(), Some(app));
/// assert!(node.sub_states().is_empty());
/// ```
#[derive(Clone)]
pub struct StateNode {
    name: String,
    parent: Option<StateId>,
    handlers: HashMap<String, Handler>,
    children: BTreeMap<String, StateId>,
}

impl StateNode {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            parent: None,
            handlers: HashMap::new(),
            children: BTreeMap::new(),
        }
    }

    /// The node's name, fixed at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the parent state, or `None` for a root.
    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// Read view of the child mapping, keyed by child name.
    ///
    /// Iteration order is the lexicographic order of child names. Use
    /// [`StateChart::set_sub_state`](crate::core::StateChart::set_sub_state)
    /// to mutate the mapping.
    pub fn sub_states(&self) -> &BTreeMap<String, StateId> {
        &self.children
    }

    /// The handler bound to `event` on this node itself, without consulting
    /// ancestors.
    ///
    /// Most callers want the inherited resolution in
    /// [`StateChart::lookup_handler`](crate::core::StateChart::lookup_handler);
    /// this accessor answers only for the node's own bindings.
    pub fn handler(&self, event: &str) -> Option<&Handler> {
        self.handlers.get(event)
    }

    /// Whether this node itself binds `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }

    /// Event names bound on this node itself, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub(crate) fn set_handler(&mut self, event: String, handler: Handler) {
        self.handlers.insert(event, handler);
    }

    pub(crate) fn set_parent(&mut self, parent: Option<StateId>) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> &mut BTreeMap<String, StateId> {
        &mut self.children
    }
}

impl fmt::Debug for StateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Handlers are opaque closures; show their event names instead.
        let mut events: Vec<&str> = self.events().collect();
        events.sort_unstable();
        f.debug_struct("StateNode")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("events", &events)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateChart;

    #[test]
    fn new_node_has_no_parent_or_bindings() {
        let node = StateNode::new("Idle".to_string());

        assert_eq!(node.name(), "Idle");
        assert_eq!(node.parent(), None);
        assert!(node.sub_states().is_empty());
        assert!(!node.handles("anything"));
        assert_eq!(node.events().count(), 0);
    }

    #[test]
    fn set_handler_binds_event() {
        let mut node = StateNode::new("Idle".to_string());
        node.set_handler("poke".to_string(), Arc::new(|| {}));

        assert!(node.handles("poke"));
        assert!(node.handler("poke").is_some());
        assert!(node.handler("prod").is_none());
    }

    #[test]
    fn events_lists_own_bindings_only() {
        let mut chart = StateChart::new();
        let parent = chart.add_state("Parent");
        let child = chart.add_child_state(parent, "Child").unwrap();
        chart.set_event(parent, "inherited", || {}).unwrap();
        chart.set_event(child, "own", || {}).unwrap();

        let events: Vec<&str> = chart.node(child).unwrap().events().collect();
        assert_eq!(events, vec!["own"]);
    }

    #[test]
    fn debug_shows_names_not_closures() {
        let mut chart = StateChart::new();
        let app = chart.add_state("App");
        chart.set_event(app, "back", || {}).unwrap();
        chart.add_child_state(app, "Menu").unwrap();

        let rendered = format!("{:?}", chart.node(app).unwrap());
        assert!(rendered.contains("App"));
        assert!(rendered.contains("back"));
        assert!(rendered.contains("Menu"));
    }
}
