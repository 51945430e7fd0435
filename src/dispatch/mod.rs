//! Selection Dispatcher
//!
//! Tracks which chart the client most recently selected. A state machine
//! with one steady state per metric category, Sales initial. Activation
//! events carry a control id ("btn-sales", "btn-customer", ...); a
//! recognized id moves the selection, an unrecognized id is an explicit
//! audited no-op rather than an error.

use crate::dataset::MetricCategory;

/// Control ids the Presentation Shell reports for each category
pub const CONTROL_SALES: &str = "btn-sales";
pub const CONTROL_CUSTOMERS: &str = "btn-customer";
pub const CONTROL_INVENTORY: &str = "btn-inventory";
pub const CONTROL_MARKETING: &str = "btn-marketing";
pub const CONTROL_SUPPLY_CHAIN: &str = "btn-supply-chain";

/// Resolve a control id to its category, if recognized
pub fn resolve_control(control: &str) -> Option<MetricCategory> {
    match control {
        CONTROL_SALES => Some(MetricCategory::Sales),
        CONTROL_CUSTOMERS => Some(MetricCategory::Customers),
        CONTROL_INVENTORY => Some(MetricCategory::Inventory),
        CONTROL_MARKETING => Some(MetricCategory::Marketing),
        CONTROL_SUPPLY_CHAIN => Some(MetricCategory::SupplyChain),
        _ => None,
    }
}

/// The control id for a category
pub fn control_id(category: MetricCategory) -> &'static str {
    match category {
        MetricCategory::Sales => CONTROL_SALES,
        MetricCategory::Customers => CONTROL_CUSTOMERS,
        MetricCategory::Inventory => CONTROL_INVENTORY,
        MetricCategory::Marketing => CONTROL_MARKETING,
        MetricCategory::SupplyChain => CONTROL_SUPPLY_CHAIN,
    }
}

/// The selection owned by the dispatcher
///
/// `active` is always one of the five declared categories; it is never
/// unset after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    /// Category whose chart the shell should display
    pub active: MetricCategory,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            active: MetricCategory::Sales,
        }
    }
}

/// How an activation event moved the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Recognized control, selection moved to a new category
    Switched {
        from: MetricCategory,
        to: MetricCategory,
    },
    /// Recognized control for the already-active category
    Unchanged(MetricCategory),
    /// Unrecognized control id; selection retained
    Ignored,
}

/// Result of dispatching one activation event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    /// The transition taken
    pub transition: Transition,
    /// Active category after the event
    pub active: MetricCategory,
}

impl Activation {
    /// True if the event changed the selection
    pub fn changed(&self) -> bool {
        matches!(self.transition, Transition::Switched { .. })
    }
}

/// Dispatches activation events onto the selection state
///
/// Events are processed synchronously, one at a time, to completion.
/// Only the dispatcher writes the selection.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    state: SelectionState,
}

impl Dispatcher {
    /// Create a dispatcher in the initial Sales state
    pub fn new() -> Self {
        Self {
            state: SelectionState::default(),
        }
    }

    /// Create a dispatcher with a specific initial category
    pub fn with_initial(category: MetricCategory) -> Self {
        Self {
            state: SelectionState { active: category },
        }
    }

    /// Currently active category
    pub fn active(&self) -> MetricCategory {
        self.state.active
    }

    /// Process one activation event
    pub fn activate(&mut self, control: &str) -> Activation {
        let transition = match resolve_control(control) {
            Some(to) if to == self.state.active => Transition::Unchanged(to),
            Some(to) => {
                let from = self.state.active;
                self.state.active = to;
                tracing::debug!(%from, %to, control, "selection switched");
                Transition::Switched { from, to }
            }
            None => {
                tracing::debug!(control, "unrecognized control id ignored");
                Transition::Ignored
            }
        };

        Activation {
            transition,
            active: self.state.active,
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_sales() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.active(), MetricCategory::Sales);
    }

    #[test]
    fn test_activate_switches() {
        let mut dispatcher = Dispatcher::new();
        let activation = dispatcher.activate(CONTROL_CUSTOMERS);

        assert_eq!(activation.active, MetricCategory::Customers);
        assert!(activation.changed());
        assert_eq!(
            activation.transition,
            Transition::Switched {
                from: MetricCategory::Sales,
                to: MetricCategory::Customers,
            }
        );
        assert_eq!(dispatcher.active(), MetricCategory::Customers);
    }

    #[test]
    fn test_unknown_control_is_noop() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.activate(CONTROL_MARKETING);

        let activation = dispatcher.activate("btn-unknown");
        assert_eq!(activation.transition, Transition::Ignored);
        assert!(!activation.changed());
        assert_eq!(dispatcher.active(), MetricCategory::Marketing);
    }

    #[test]
    fn test_repeat_activation_is_idempotent() {
        let mut dispatcher = Dispatcher::new();

        let first = dispatcher.activate(CONTROL_INVENTORY);
        assert!(first.changed());

        let second = dispatcher.activate(CONTROL_INVENTORY);
        assert_eq!(
            second.transition,
            Transition::Unchanged(MetricCategory::Inventory)
        );
        assert!(!second.changed());
        assert_eq!(second.active, first.active);
    }

    #[test]
    fn test_control_roundtrip() {
        for category in MetricCategory::all() {
            assert_eq!(resolve_control(control_id(*category)), Some(*category));
        }
        assert_eq!(resolve_control("btn-search"), None);
    }

    #[test]
    fn test_with_initial() {
        let dispatcher = Dispatcher::with_initial(MetricCategory::SupplyChain);
        assert_eq!(dispatcher.active(), MetricCategory::SupplyChain);
    }
}
