//! Builder for assembling charts from state definitions.

use crate::builder::error::BuildError;
use crate::builder::state::StateDef;
use crate::core::{StateChart, StateId};

/// Builder that assembles a [`StateChart`] from a tree of [`StateDef`]s.
///
/// Validates that state names are non-empty and that sibling names are
/// unique, then materializes the hierarchy in one pass. Returns the chart
/// together with the root's id.
pub struct ChartBuilder {
    root: Option<StateDef>,
}

impl ChartBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Set the root state definition (required).
    pub fn root(mut self, def: StateDef) -> Self {
        self.root = Some(def);
        self
    }

    /// Build the chart.
    /// Returns an error if no root was given or a definition is invalid.
    pub fn build(self) -> Result<(StateChart, StateId), BuildError> {
        let root = self.root.ok_or(BuildError::MissingRoot)?;
        let mut chart = StateChart::new();
        let root_id = Self::materialize(&mut chart, None, root)?;
        Ok((chart, root_id))
    }

    fn materialize(
        chart: &mut StateChart,
        parent: Option<StateId>,
        def: StateDef,
    ) -> Result<StateId, BuildError> {
        if def.name.is_empty() {
            return Err(BuildError::EmptyStateName);
        }

        let id = match parent {
            Some(parent) => chart.add_child_state(parent, def.name.clone())?,
            None => chart.add_state(def.name.clone()),
        };

        for (event, handler) in def.handlers {
            chart.set_event_handler(id, event, handler)?;
        }

        for child in def.children {
            // The chart would silently replace a same-named sibling; in a
            // declarative definition that is almost certainly a mistake.
            if chart.child(id, &child.name)?.is_some() {
                return Err(BuildError::DuplicateChildName {
                    parent: def.name.clone(),
                    child: child.name,
                });
            }
            Self::materialize(chart, Some(id), child)?;
        }

        Ok(id)
    }
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn builder_requires_root() {
        let result = ChartBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingRoot)));
    }

    #[test]
    fn builder_rejects_empty_names() {
        let result = ChartBuilder::new().root(StateDef::new("")).build();
        assert!(matches!(result, Err(BuildError::EmptyStateName)));

        let result = ChartBuilder::new()
            .root(StateDef::new("App").child(StateDef::new("")))
            .build();
        assert!(matches!(result, Err(BuildError::EmptyStateName)));
    }

    #[test]
    fn builder_rejects_duplicate_siblings() {
        let result = ChartBuilder::new()
            .root(
                StateDef::new("App")
                    .child(StateDef::new("Menu"))
                    .child(StateDef::new("Menu")),
            )
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateChildName { .. })
        ));
    }

    #[test]
    fn built_chart_resolves_inherited_handlers() {
        let backs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&backs);

        let (chart, app) = ChartBuilder::new()
            .root(
                StateDef::new("App")
                    .on("back", move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                    })
                    .child(StateDef::new("Menu").on("select", || {})),
            )
            .build()
            .unwrap();

        let menu = chart.child(app, "Menu").unwrap().unwrap();
        assert_eq!(chart.describe(menu).unwrap(), "State: Menu parent: App");

        chart.lookup_handler(menu, "back").unwrap().unwrap()();
        assert_eq!(backs.load(Ordering::SeqCst), 1);
        assert!(chart.lookup_handler(menu, "select").unwrap().is_some());
        assert!(chart.lookup_handler(app, "select").unwrap().is_none());
    }

    #[test]
    fn deep_definitions_materialize_in_order() {
        let (chart, root) = ChartBuilder::new()
            .root(
                StateDef::new("Root")
                    .child(StateDef::new("A").child(StateDef::new("A1")))
                    .child(StateDef::new("B")),
            )
            .build()
            .unwrap();

        let names: Vec<&str> = chart
            .sub_states(root)
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, vec!["A", "B"]);

        let a = chart.child(root, "A").unwrap().unwrap();
        assert!(chart.child(a, "A1").unwrap().is_some());
    }

    #[test]
    fn duplicate_events_follow_last_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let c1 = Arc::clone(&first);
        let c2 = Arc::clone(&second);

        let (chart, root) = ChartBuilder::new()
            .root(
                StateDef::new("Root")
                    .on("tick", move || {
                        c1.fetch_add(1, Ordering::SeqCst);
                    })
                    .on("tick", move || {
                        c2.fetch_add(1, Ordering::SeqCst);
                    }),
            )
            .build()
            .unwrap();

        chart.lookup_handler(root, "tick").unwrap().unwrap()();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
