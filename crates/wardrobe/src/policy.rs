use crate::slot::Slot;
use crate::state::SelectionState;

/// Whether `slot` may change under the current selection.
///
/// Outfit is locked only while every separate piece (top, bottom, shoes) is worn,
/// whereas any single separate is locked as soon as an outfit is worn. The rule is
/// asymmetric, so an outfit may end up worn together with one or two separates.
pub fn is_change_allowed(state: &SelectionState, slot: Slot) -> bool {
    match slot {
        Slot::Outfit => !Slot::SEPARATES.iter().all(|s| state.is_active(*s)),
        Slot::Top | Slot::Bottom | Slot::Shoes => !state.is_active(Slot::Outfit),
        Slot::Accessories | Slot::Head => true,
    }
}
