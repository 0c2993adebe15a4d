use crate::body::BodyPartSet;
use crate::cycle::{self, Request};
use crate::occlusion;
use crate::policy;
use crate::registry::{Piece, SlotRegistry};
use crate::sink::VisibilitySink;
use crate::slot::Slot;
use crate::state::SelectionState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

/// Result of one [`SelectionEngine::change`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub slot: Slot,
    pub previous: Option<Piece>,
    pub current: Option<Piece>,
    /// `false` when the exclusivity rule rejected the change and nothing happened.
    pub applied: bool,
}

impl Change {
    fn rejected(slot: Slot, current: Option<Piece>) -> Self {
        Self {
            slot,
            previous: current.clone(),
            current,
            applied: false,
        }
    }
}

pub struct SelectionEngine<S, R = ChaCha8Rng> {
    registry: SlotRegistry,
    state: SelectionState,
    mask: BodyPartSet,
    sink: S,
    rng: R,
}

impl<S: VisibilitySink> SelectionEngine<S> {
    pub fn seeded(registry: SlotRegistry, sink: S, seed: u64) -> Self {
        Self::new(registry, sink, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy(registry: SlotRegistry, sink: S) -> Self {
        Self::new(registry, sink, ChaCha8Rng::from_os_rng())
    }
}

impl<S: VisibilitySink, R: Rng> SelectionEngine<S, R> {
    pub fn new(registry: SlotRegistry, sink: S, rng: R) -> Self {
        Self {
            registry,
            state: SelectionState::new(),
            mask: BodyPartSet::new(),
            sink,
            rng,
        }
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn mask(&self) -> &BodyPartSet {
        &self.mask
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn current(&self, slot: Slot) -> Option<&Piece> {
        self.registry.piece(slot, self.state.get(slot))
    }

    pub fn change(&mut self, slot: Slot, request: Request) -> Change {
        let current = self.state.get(slot);

        if !policy::is_change_allowed(&self.state, slot) {
            log::debug!("Change of {slot} blocked by the outfit/separates rule");
            return Change::rejected(slot, self.registry.piece(slot, current).cloned());
        }

        let next = cycle::next_index(current, self.registry.len(slot), request, &mut self.rng);
        let previous = self.registry.piece(slot, current);

        self.state.set(slot, next);
        let new = self.registry.piece(slot, next);

        self.mask = occlusion::resolve(&self.registry, &self.state);

        if let Some(piece) = previous
            && current != next
        {
            self.sink.set_piece_visible(piece, false);
            log::debug!("Unset {slot} piece {}", piece.renderer);
        }
        if let Some(piece) = new {
            self.sink.set_piece_visible(piece, true);
            log::debug!("Set {slot} piece {}", piece.renderer);
        }
        self.sink.resync_body_parts(&self.mask);

        Change {
            slot,
            previous: previous.cloned(),
            current: new.cloned(),
            applied: true,
        }
    }

    /// Randomizes every slot except the outfit, in slot order.
    pub fn randomize_all(&mut self) -> Vec<Change> {
        let changes: Vec<Change> = Slot::iter()
            .filter(|slot| *slot != Slot::Outfit)
            .map(|slot| self.change(slot, Request::Random))
            .collect();
        log::info!("Randomized wardrobe, hidden body parts: {}", self.mask);
        changes
    }

    /// Takes everything off and shows the whole base body again.
    pub fn reinitialize(&mut self) {
        for slot in Slot::iter() {
            if let Some(piece) = self.registry.piece(slot, self.state.get(slot)) {
                self.sink.set_piece_visible(piece, false);
            }
        }
        self.state = SelectionState::new();
        self.mask.clear();
        self.sink.resync_body_parts(&self.mask);
        log::info!("Wardrobe reinitialized");
    }
}
