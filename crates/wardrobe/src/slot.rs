use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// Customization layers, top of the character to bottom. The order is part of the
/// contract: bulk randomization walks slots in this order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    EnumCount,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Slot {
    #[strum(to_string = "accessories", serialize = "acc", serialize = "0")]
    Accessories,
    #[strum(to_string = "head", serialize = "1")]
    Head,
    #[strum(to_string = "outfit", serialize = "2")]
    Outfit,
    #[strum(to_string = "top", serialize = "3")]
    Top,
    #[strum(to_string = "bottom", serialize = "4")]
    Bottom,
    #[strum(to_string = "shoes", serialize = "5")]
    Shoes,
}

impl Slot {
    /// Slots that together stand in for a one-piece outfit.
    pub const SEPARATES: [Slot; 3] = [Slot::Top, Slot::Bottom, Slot::Shoes];

    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }

    pub fn is_separate(&self) -> bool {
        Self::SEPARATES.contains(self)
    }
}
