use crate::cycle;
use crate::slot::Slot;
use strum::{EnumCount, IntoEnumIterator};

/// Current selection per slot. `None` means nothing is worn in that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    indices: [Option<usize>; Slot::COUNT],
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<usize> {
        self.indices[slot.as_index()]
    }

    /// Index in the signed convention, `-1` for none.
    pub fn signed(&self, slot: Slot) -> isize {
        cycle::to_signed(self.get(slot))
    }

    pub fn is_active(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    pub fn active_slots(&self) -> impl Iterator<Item = (Slot, usize)> + '_ {
        Slot::iter().filter_map(|slot| self.get(slot).map(|i| (slot, i)))
    }

    pub(crate) fn set(&mut self, slot: Slot, index: Option<usize>) {
        self.indices[slot.as_index()] = index;
    }

    #[cfg(test)]
    pub(crate) fn with(mut self, slot: Slot, index: usize) -> Self {
        self.set(slot, Some(index));
        self
    }
}
