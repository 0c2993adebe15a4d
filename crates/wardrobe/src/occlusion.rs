use crate::body::BodyPartSet;
use crate::registry::SlotRegistry;
use crate::state::SelectionState;

/// Union of the body parts covered by every worn piece.
///
/// Always rebuilt from scratch: two slots may cover the same part, so removing one
/// piece's parts from a running mask would expose parts another piece still covers.
pub fn resolve(registry: &SlotRegistry, state: &SelectionState) -> BodyPartSet {
    let mut mask = BodyPartSet::new();
    for (slot, index) in state.active_slots() {
        if let Some(piece) = registry.piece(slot, Some(index)) {
            mask.extend_from(&piece.occludes);
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyPart;
    use crate::registry::SlotsConfig;
    use crate::registry::tests::{full_base_body, piece};
    use crate::slot::Slot;

    fn registry() -> SlotRegistry {
        let slots = SlotsConfig {
            head: vec![piece("Helmet", &[BodyPart::Head])],
            outfit: vec![piece(
                "Robe",
                &[BodyPart::TorsoUpper, BodyPart::TorsoMiddle, BodyPart::Hips],
            )],
            top: vec![piece("Vest", &[BodyPart::TorsoUpper, BodyPart::TorsoMiddle])],
            ..Default::default()
        };
        SlotRegistry::load(&full_base_body(), &slots).unwrap()
    }

    #[test]
    fn test_empty_state_hides_nothing() {
        assert!(resolve(&registry(), &SelectionState::new()).is_empty());
    }

    #[test]
    fn test_mask_is_exact_union() {
        let state = SelectionState::new()
            .with(Slot::Head, 0)
            .with(Slot::Outfit, 0)
            .with(Slot::Top, 0);
        let mask = resolve(&registry(), &state);
        assert_eq!(
            mask,
            BodyPartSet::from([
                BodyPart::Head,
                BodyPart::TorsoUpper,
                BodyPart::TorsoMiddle,
                BodyPart::Hips
            ])
        );
    }

    #[test]
    fn test_shared_parts_survive_removal_of_one_piece() {
        let both = SelectionState::new().with(Slot::Outfit, 0).with(Slot::Top, 0);
        assert!(resolve(&registry(), &both).contains(&BodyPart::TorsoMiddle));

        let only_outfit = SelectionState::new().with(Slot::Outfit, 0);
        let mask = resolve(&registry(), &only_outfit);
        assert!(mask.contains(&BodyPart::TorsoUpper));
        assert!(mask.contains(&BodyPart::TorsoMiddle));
    }
}
