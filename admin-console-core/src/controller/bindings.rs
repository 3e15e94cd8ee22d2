//! Live regions and the bindings attached inside them.

use std::collections::BTreeMap;

use crate::traits::BindingToken;
use crate::types::{Region, Slot};

/// Tokens of every attached binding, grouped by the slot of their region.
#[derive(Debug, Default)]
pub struct BindingSet {
    by_slot: BTreeMap<Slot, Vec<BindingToken>>,
}

impl BindingSet {
    pub fn insert(&mut self, token: BindingToken) {
        self.by_slot
            .entry(token.region().slot)
            .or_default()
            .push(token);
    }

    /// Take the tokens of `slot` and of every slot below it.
    pub fn release(&mut self, slot: Slot) -> Vec<BindingToken> {
        let slots: Vec<Slot> = self
            .by_slot
            .keys()
            .copied()
            .filter(|s| s.is_within(slot))
            .collect();
        slots
            .into_iter()
            .filter_map(|s| self.by_slot.remove(&s))
            .flatten()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_slot.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, slot: Slot) -> usize {
        self.by_slot.get(&slot).map_or(0, Vec::len)
    }
}

/// The live handle of each slot.
#[derive(Debug, Default)]
pub struct ActiveRegions {
    live: BTreeMap<Slot, Region>,
}

impl ActiveRegions {
    pub fn set(&mut self, region: Region) {
        self.live.insert(region.slot, region);
    }

    pub fn get(&self, slot: Slot) -> Option<Region> {
        self.live.get(&slot).copied()
    }

    pub fn is_live(&self, region: Region) -> bool {
        self.live.get(&region.slot) == Some(&region)
    }

    /// Forget `slot` and every slot below it.
    pub fn release(&mut self, slot: Slot) {
        self.live.retain(|s, _| !s.is_within(slot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Surface;

    fn token(id: u64, slot: Slot) -> BindingToken {
        BindingToken::new(id, Region::new(slot, id), Surface::Cancel)
    }

    #[test]
    fn releasing_main_takes_child_bindings() {
        let mut set = BindingSet::default();
        set.insert(token(1, Slot::Navigation));
        set.insert(token(2, Slot::List));
        set.insert(token(3, Slot::Suggestions));
        set.insert(token(4, Slot::Main));

        let released: Vec<u64> = set.release(Slot::Main).iter().map(BindingToken::id).collect();
        assert_eq!(released.len(), 3);
        assert!(released.contains(&3));
        assert_eq!(set.len(), 1);
        assert_eq!(set.count(Slot::Navigation), 1);
    }

    #[test]
    fn old_generation_is_not_live() {
        let mut regions = ActiveRegions::default();
        regions.set(Region::new(Slot::List, 1));
        regions.set(Region::new(Slot::List, 2));
        assert!(!regions.is_live(Region::new(Slot::List, 1)));
        assert!(regions.is_live(Region::new(Slot::List, 2)));

        regions.set(Region::new(Slot::Suggestions, 3));
        regions.release(Slot::Panel);
        assert_eq!(regions.get(Slot::Suggestions), None);
        assert!(regions.get(Slot::List).is_some());
    }
}
