use crate::body::{BodyPart, BodyPartSet};
use crate::slot::Slot;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;

/// Opaque reference to a renderable owned by the visibility sink.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct RenderHandle(String);

crate::impl_string_newtype!(RenderHandle);

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PieceConfig {
    pub renderer: RenderHandle,
    #[serde(default)]
    pub occludes: BodyPartSet,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BaseBodyConfig {
    pub part: BodyPart,
    pub renderer: RenderHandle,
}

/// Per-slot piece lists, ordered top of the character to bottom.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SlotsConfig {
    #[serde(default)]
    pub accessories: Vec<PieceConfig>,
    #[serde(default)]
    pub head: Vec<PieceConfig>,
    #[serde(default)]
    pub outfit: Vec<PieceConfig>,
    #[serde(default)]
    pub top: Vec<PieceConfig>,
    #[serde(default)]
    pub bottom: Vec<PieceConfig>,
    #[serde(default)]
    pub shoes: Vec<PieceConfig>,
}

impl SlotsConfig {
    pub fn for_slot(&self, slot: Slot) -> &[PieceConfig] {
        match slot {
            Slot::Accessories => &self.accessories,
            Slot::Head => &self.head,
            Slot::Outfit => &self.outfit,
            Slot::Top => &self.top,
            Slot::Bottom => &self.bottom,
            Slot::Shoes => &self.shoes,
        }
    }
}

/// A selectable item within a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub slot: Slot,
    pub position: usize,
    pub renderer: RenderHandle,
    pub occludes: BodyPartSet,
}

impl Piece {
    pub fn name(&self) -> &str {
        self.renderer.as_str()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected {expected} base body renderers, found {found}")]
    BaseBodyLength { expected: usize, found: usize },
    #[error("Base body part '{0}' is listed more than once")]
    DuplicateBodyPart(BodyPart),
    #[error("Base body part '{0}' has an empty renderer")]
    EmptyBaseRenderer(BodyPart),
    #[error("Piece {position} of slot '{slot}' has an empty renderer")]
    EmptyPieceRenderer { slot: Slot, position: usize },
    #[error("Piece {position} of slot '{slot}' reuses a renderer of another piece")]
    DuplicatePieceRenderer { slot: Slot, position: usize },
}

/// Immutable catalogue of pieces per slot plus the base body renderables.
#[derive(Debug, Clone)]
pub struct SlotRegistry {
    slots: [Vec<Piece>; Slot::COUNT],
    base_body: Vec<(BodyPart, RenderHandle)>,
}

impl SlotRegistry {
    pub fn load(base_body: &[BaseBodyConfig], slots: &SlotsConfig) -> Result<Self, ConfigError> {
        if base_body.len() != BodyPart::COUNT {
            return Err(ConfigError::BaseBodyLength {
                expected: BodyPart::COUNT,
                found: base_body.len(),
            });
        }

        let mut seen = BTreeSet::new();
        for entry in base_body {
            if !seen.insert(entry.part) {
                return Err(ConfigError::DuplicateBodyPart(entry.part));
            }
            if entry.renderer.is_empty() {
                return Err(ConfigError::EmptyBaseRenderer(entry.part));
            }
        }

        let mut base_body: Vec<_> = base_body
            .iter()
            .map(|entry| (entry.part, entry.renderer.clone()))
            .collect();
        base_body.sort_by_key(|(part, _)| *part);

        let mut renderers = BTreeSet::new();
        let mut lists: [Vec<Piece>; Slot::COUNT] = Default::default();
        for slot in Slot::iter() {
            lists[slot.as_index()] = slots
                .for_slot(slot)
                .iter()
                .enumerate()
                .map(|(position, cfg)| {
                    if cfg.renderer.is_empty() {
                        return Err(ConfigError::EmptyPieceRenderer { slot, position });
                    }
                    if !renderers.insert(cfg.renderer.clone()) {
                        return Err(ConfigError::DuplicatePieceRenderer { slot, position });
                    }
                    Ok(Piece {
                        slot,
                        position,
                        renderer: cfg.renderer.clone(),
                        occludes: cfg.occludes.clone(),
                    })
                })
                .collect::<Result<_, _>>()?;
        }

        log::debug!(
            "Loaded wardrobe with {} pieces",
            lists.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self {
            slots: lists,
            base_body,
        })
    }

    pub fn options_for(&self, slot: Slot) -> &[Piece] {
        &self.slots[slot.as_index()]
    }

    pub fn len(&self, slot: Slot) -> usize {
        self.slots[slot.as_index()].len()
    }

    pub fn is_empty(&self, slot: Slot) -> bool {
        self.slots[slot.as_index()].is_empty()
    }

    pub fn piece(&self, slot: Slot, index: Option<usize>) -> Option<&Piece> {
        index.and_then(|i| self.slots[slot.as_index()].get(i))
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten()
    }

    /// Base body renderables, one per [`BodyPart`], in enumeration order.
    pub fn base_body(&self) -> &[(BodyPart, RenderHandle)] {
        &self.base_body
    }
}
