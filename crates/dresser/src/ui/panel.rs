use crate::ui::DEFAULT_LABEL;
use strum::{EnumCount, IntoEnumIterator};
use wardrobe::policy;
use wardrobe::{Change, Piece, SelectionState, Slot, SlotRegistry};

/// Per-slot label and button state as a front end would show it.
///
/// Enabled flags mirror the exclusivity rule for display only; the engine enforces
/// the rule on its own whatever the panel says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    labels: [String; Slot::COUNT],
    enabled: [bool; Slot::COUNT],
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            labels: std::array::from_fn(|_| DEFAULT_LABEL.to_string()),
            enabled: [true; Slot::COUNT],
        }
    }
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    fn label_for(piece: Option<&Piece>) -> String {
        piece.map_or_else(|| DEFAULT_LABEL.to_string(), |p| p.name().to_string())
    }

    pub fn apply(&mut self, change: &Change, state: &SelectionState) {
        self.labels[change.slot.as_index()] = Self::label_for(change.current.as_ref());
        self.refresh_buttons(state);
    }

    /// Rebuilds every label from scratch, e.g. after a reset or reload.
    pub fn sync(&mut self, registry: &SlotRegistry, state: &SelectionState) {
        for slot in Slot::iter() {
            self.labels[slot.as_index()] = Self::label_for(registry.piece(slot, state.get(slot)));
        }
        self.refresh_buttons(state);
    }

    fn refresh_buttons(&mut self, state: &SelectionState) {
        for slot in Slot::iter() {
            self.enabled[slot.as_index()] = policy::is_change_allowed(state, slot);
        }
    }

    pub fn label(&self, slot: Slot) -> &str {
        &self.labels[slot.as_index()]
    }

    pub fn is_enabled(&self, slot: Slot) -> bool {
        self.enabled[slot.as_index()]
    }
}
