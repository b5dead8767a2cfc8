//! Arena storage for state nodes and the handler lookup chain.
//!
//! The chart owns every node and wires the hierarchy through ids rather than
//! references. Parent links are only writable through [`StateChart::set_sub_state`]
//! and [`StateChart::add_child_state`], which reject attachments that would
//! create a cycle, so the ancestor chain consulted by
//! [`StateChart::lookup_handler`] always terminates.

use crate::core::error::ChartError;
use crate::core::node::{Handler, StateNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Index of a state node within its [`StateChart`].
///
/// Ids are issued by the chart that created the node and are only meaningful
/// for that chart; presenting an id to a different chart yields
/// [`ChartError::UnknownState`]. Ids stay valid for the life of the chart;
/// nodes are never removed, only detached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

/// Arena of hierarchical state nodes.
///
/// A chart is a registry of [`StateNode`]s plus the operations that keep the
/// hierarchy consistent: creating states, binding event handlers, attaching
/// children, and resolving which handler answers an event by walking the
/// parent chain. It holds no "current state" pointer; an external machine
/// driver tracks the active node and calls [`lookup_handler`](Self::lookup_handler)
/// against it when an event arrives.
///
/// # Example
///
/// ```rust
/// use statekit::StateChart;
///
/// # fn main() -> Result<(), statekit::ChartError> {
/// let mut chart = StateChart::new();
/// let app = chart.add_state("App");
/// let menu = chart.add_child_state(app, "Menu")?;
///
/// chart.set_event(app, "back", || {})?;
/// chart.set_event(menu, "select", || {})?;
///
/// // Menu answers "select" itself and inherits "back" from App.
/// assert!(chart.lookup_handler(menu, "select")?.is_some());
/// assert!(chart.lookup_handler(menu, "back")?.is_some());
/// assert!(chart.lookup_handler(menu, "unknown")?.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct StateChart {
    nodes: Vec<StateNode>,
}

impl Default for StateChart {
    fn default() -> Self {
        Self::new()
    }
}

impl StateChart {
    /// Create an empty chart.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a new parentless state named `name`.
    ///
    /// The node starts with no handlers and no children. Returns the id used
    /// to address it in every other operation.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateId {
        let id = StateId(self.nodes.len());
        self.nodes.push(StateNode::new(name.into()));
        id
    }

    /// Create a state named `name` and attach it under `parent` in one step.
    ///
    /// Equivalent to [`add_state`](Self::add_state) followed by
    /// [`set_sub_state`](Self::set_sub_state). A fresh node cannot be an
    /// ancestor of anything, so only an unknown `parent` id can fail.
    pub fn add_child_state(
        &mut self,
        parent: StateId,
        name: impl Into<String>,
    ) -> Result<StateId, ChartError> {
        self.node(parent)?;
        let id = self.add_state(name);
        self.set_sub_state(parent, id)?;
        Ok(id)
    }

    /// Bind `action` to `event` on `state`.
    ///
    /// The last registration for a given event name wins; any prior binding
    /// for `event` on this node is overwritten. The action captures its
    /// environment by move.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statekit::StateChart;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// # fn main() -> Result<(), statekit::ChartError> {
    /// let mut chart = StateChart::new();
    /// let door = chart.add_state("Door");
    ///
    /// let openings = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&openings);
    /// chart.set_event(door, "open", move || {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// })?;
    ///
    /// let handler = chart.lookup_handler(door, "open")?.unwrap();
    /// handler();
    /// assert_eq!(openings.load(Ordering::SeqCst), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_event<F>(
        &mut self,
        state: StateId,
        event: impl Into<String>,
        action: F,
    ) -> Result<(), ChartError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.set_event_handler(state, event, Arc::new(action))
    }

    /// Bind an already-shared [`Handler`] to `event` on `state`.
    ///
    /// Useful when one action should answer the same event on several states;
    /// otherwise [`set_event`](Self::set_event) is the convenient form.
    pub fn set_event_handler(
        &mut self,
        state: StateId,
        event: impl Into<String>,
        handler: Handler,
    ) -> Result<(), ChartError> {
        self.node_mut(state)?.set_handler(event.into(), handler);
        Ok(())
    }

    /// Resolve the handler for `event`, starting at `state` and walking up
    /// the parent chain.
    ///
    /// The closest node wins: `state` itself first, then its parent, and so
    /// on to the root. A child state therefore only needs to bind the events
    /// it overrides, inheriting the rest from its ancestors. If no node in
    /// the chain binds `event`, the lookup resolves to `Ok(None)`. Absence
    /// is an expected outcome, and callers should treat it as a no-op for
    /// that event.
    pub fn lookup_handler(
        &self,
        state: StateId,
        event: &str,
    ) -> Result<Option<Handler>, ChartError> {
        let mut cursor = Some(state);
        while let Some(id) = cursor {
            let node = self.node(id)?;
            if let Some(handler) = node.handler(event) {
                return Ok(Some(Arc::clone(handler)));
            }
            cursor = node.parent();
        }
        Ok(None)
    }

    /// Attach `child` under `parent`, keyed by the child's name.
    ///
    /// Keeps the parent and child links mutual inverses: the child's parent
    /// back-reference is set to `parent`, and if the child was previously
    /// attached elsewhere it is first removed from that parent's children.
    /// An existing child of `parent` with the same name is replaced and
    /// orphaned: it stays in the chart as a detached root but is no longer
    /// reachable through `parent`.
    ///
    /// Fails with [`ChartError::CycleDetected`] if `child` is `parent` itself
    /// or one of its ancestors, since the attachment would make the node its
    /// own ancestor and handler lookup could never terminate.
    pub fn set_sub_state(&mut self, parent: StateId, child: StateId) -> Result<(), ChartError> {
        self.node(parent)?;
        let child_name = self.node(child)?.name().to_string();

        if self.chain_contains(parent, child)? {
            return Err(ChartError::CycleDetected { state: child_name });
        }

        let old_parent = self.node(child)?.parent();
        if let Some(old_parent) = old_parent {
            self.node_mut(old_parent)?.children_mut().remove(&child_name);
        }

        let replaced = self
            .node_mut(parent)?
            .children_mut()
            .insert(child_name, child);
        if let Some(orphan) = replaced {
            if orphan != child {
                self.node_mut(orphan)?.set_parent(None);
            }
        }

        self.node_mut(child)?.set_parent(Some(parent));
        Ok(())
    }

    /// Read view of the children of `state`, keyed by child name.
    pub fn sub_states(&self, state: StateId) -> Result<&BTreeMap<String, StateId>, ChartError> {
        Ok(self.node(state)?.sub_states())
    }

    /// Look up a direct child of `parent` by name.
    pub fn child(&self, parent: StateId, name: &str) -> Result<Option<StateId>, ChartError> {
        Ok(self.node(parent)?.sub_states().get(name).copied())
    }

    /// Human-readable description of `state`: its name and, when attached,
    /// its parent's name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statekit::StateChart;
    ///
    /// # fn main() -> Result<(), statekit::ChartError> {
    /// let mut chart = StateChart::new();
    /// let app = chart.add_state("App");
    /// let menu = chart.add_child_state(app, "Menu")?;
    ///
    /// assert_eq!(chart.describe(app)?, "State: App");
    /// assert_eq!(chart.describe(menu)?, "State: Menu parent: App");
    /// # Ok(())
    /// # }
    /// ```
    pub fn describe(&self, state: StateId) -> Result<String, ChartError> {
        let node = self.node(state)?;
        match node.parent() {
            Some(parent) => {
                let parent_name = self.node(parent)?.name();
                Ok(format!("State: {} parent: {}", node.name(), parent_name))
            }
            None => Ok(format!("State: {}", node.name())),
        }
    }

    /// Borrow the node addressed by `id`.
    pub fn node(&self, id: StateId) -> Result<&StateNode, ChartError> {
        self.nodes.get(id.0).ok_or(ChartError::UnknownState(id))
    }

    /// Name of the state addressed by `id`.
    pub fn name(&self, id: StateId) -> Result<&str, ChartError> {
        Ok(self.node(id)?.name())
    }

    /// Parent of the state addressed by `id`, or `None` for a root.
    pub fn parent(&self, id: StateId) -> Result<Option<StateId>, ChartError> {
        Ok(self.node(id)?.parent())
    }

    /// Number of nodes in the chart, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chart holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_mut(&mut self, id: StateId) -> Result<&mut StateNode, ChartError> {
        self.nodes.get_mut(id.0).ok_or(ChartError::UnknownState(id))
    }

    /// Whether `candidate` appears in the ancestor chain of `from`,
    /// `from` itself included.
    fn chain_contains(&self, from: StateId, candidate: StateId) -> Result<bool, ChartError> {
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            if id == candidate {
                return Ok(true);
            }
            cursor = self.node(id)?.parent();
        }
        Ok(false)
    }
}
