//! Ordered collection of live targets.

use super::types::{Point, SessionTime, Target, TargetId};

/// Live targets in insertion order.
///
/// Order matters: hit-testing credits the first target in this order whose
/// bounds contain the shot, not the nearest or the one drawn on top.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetList {
    targets: Vec<Target>,
}

impl TargetList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: Target) {
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets.iter().find(|target| target.id == id)
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.get(id).is_some()
    }

    /// Index of the first target whose bounds at `now` contain `point`.
    pub fn first_hit(&self, point: Point, now: SessionTime) -> Option<usize> {
        self.targets
            .iter()
            .position(|target| target.bounds_at(now).contains(point))
    }

    /// Removes and returns the target at `index`, keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Target {
        self.targets.remove(index)
    }

    /// Removes the target if it is still present. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: TargetId) -> Option<Target> {
        let index = self.targets.iter().position(|target| target.id == id)?;
        Some(self.targets.remove(index))
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}
