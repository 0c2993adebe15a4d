use std::collections::BTreeMap;
use wardrobe::{BodyPart, BodyPartSet, Piece, RenderHandle, SlotRegistry, VisibilitySink};

/// Visibility bookkeeping for every renderable the wardrobe knows about.
///
/// Pieces start hidden and base body parts start visible.
#[derive(Debug, Clone, Default)]
pub struct SceneSink {
    pieces: BTreeMap<RenderHandle, bool>,
    base_body: Vec<(BodyPart, RenderHandle, bool)>,
}

impl SceneSink {
    pub fn new(registry: &SlotRegistry) -> Self {
        Self {
            pieces: registry
                .pieces()
                .map(|p| (p.renderer.clone(), false))
                .collect(),
            base_body: registry
                .base_body()
                .iter()
                .map(|(part, handle)| (*part, handle.clone(), true))
                .collect(),
        }
    }

    pub fn is_visible(&self, handle: &RenderHandle) -> bool {
        self.pieces.get(handle).copied().unwrap_or_else(|| {
            self.base_body
                .iter()
                .any(|(_, h, visible)| h == handle && *visible)
        })
    }

    pub fn visible_pieces(&self) -> impl Iterator<Item = &RenderHandle> {
        self.pieces
            .iter()
            .filter_map(|(handle, visible)| visible.then_some(handle))
    }

    pub fn hidden_body_parts(&self) -> BodyPartSet {
        self.base_body
            .iter()
            .filter_map(|(part, _, visible)| (!visible).then_some(*part))
            .collect()
    }
}

impl VisibilitySink for SceneSink {
    fn set_piece_visible(&mut self, piece: &Piece, visible: bool) {
        log::debug!(
            "{} {}",
            if visible { "Show" } else { "Hide" },
            piece.renderer
        );
        self.pieces.insert(piece.renderer.clone(), visible);
    }

    fn resync_body_parts(&mut self, occluded: &BodyPartSet) {
        for (_, _, visible) in &mut self.base_body {
            *visible = true;
        }
        for (part, _, visible) in &mut self.base_body {
            if occluded.contains(&*part) {
                *visible = false;
            }
        }
        if occluded.is_empty() {
            log::debug!("Base body fully visible");
        } else {
            log::debug!("Base body hidden: {}", occluded);
        }
    }
}
