use derive_more::{Deref, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::collections::BTreeSet;
use std::fmt;
use strum::{Display as StrumDisplay, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// Base body regions that a worn piece can cover.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BodyPart {
    Head,
    Hands,
    ArmsLower,
    ArmsUpper,
    Shoulders,
    TorsoUpper,
    TorsoMiddle,
    TorsoBottom,
    Hips,
    LegsUpper,
    LegsKnee,
    LegsLower,
    LegsFeet,
}

impl BodyPart {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }
}

/// Ordered set of body parts. Displays as `head, hands` or `None` when empty.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Deref, From, Into,
)]
#[serde(transparent)]
pub struct BodyPartSet(BTreeSet<BodyPart>);

impl BodyPartSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, part: BodyPart) -> bool {
        self.0.insert(part)
    }

    pub fn extend_from(&mut self, other: &BodyPartSet) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<BodyPart> for BodyPartSet {
    fn from_iter<I: IntoIterator<Item = BodyPart>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[BodyPart; N]> for BodyPartSet {
    fn from(parts: [BodyPart; N]) -> Self {
        parts.into_iter().collect()
    }
}

impl fmt::Display for BodyPartSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("None");
        }
        let names: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&names.join(", "))
    }
}
