use crate::pokemon::Pokemon;
use serde::{Deserialize, Serialize};

/// Box-organised storage of records.
///
/// A box is the unit the bulk commands operate on; empty slots are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(default)]
    pub current_box: usize,

    #[serde(default)]
    pub boxes: Vec<Vec<Option<Pokemon>>>,
}

impl SaveFile {
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn slot(&self, box_idx: usize, slot: usize) -> Option<&Pokemon> {
        self.boxes.get(box_idx)?.get(slot)?.as_ref()
    }

    pub fn slot_mut(&mut self, box_idx: usize, slot: usize) -> Option<&mut Pokemon> {
        self.boxes.get_mut(box_idx)?.get_mut(slot)?.as_mut()
    }

    /// Occupied slots of one box as `(slot, record)` pairs.
    pub fn occupied(&self, box_idx: usize) -> impl Iterator<Item = (usize, &Pokemon)> {
        self.boxes
            .get(box_idx)
            .into_iter()
            .flat_map(|b| b.iter().enumerate())
            .filter_map(|(i, s)| s.as_ref().map(|p| (i, p)))
    }

    pub fn record_count(&self) -> usize {
        (0..self.boxes.len()).map(|b| self.occupied(b).count()).sum()
    }
}
