use crate::body::BodyPartSet;
use crate::registry::Piece;

/// Host side of the engine: whatever actually shows and hides geometry.
pub trait VisibilitySink {
    fn set_piece_visible(&mut self, piece: &Piece, visible: bool);

    /// Show every base body part, then hide exactly the `occluded` ones.
    fn resync_body_parts(&mut self, occluded: &BodyPartSet);
}

impl<S: VisibilitySink + ?Sized> VisibilitySink for &mut S {
    fn set_piece_visible(&mut self, piece: &Piece, visible: bool) {
        (**self).set_piece_visible(piece, visible);
    }

    fn resync_body_parts(&mut self, occluded: &BodyPartSet) {
        (**self).resync_body_parts(occluded);
    }
}
