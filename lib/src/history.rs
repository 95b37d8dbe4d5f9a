//! All generations of a simulation.

use crate::generation::Generation;
use std::slice::Iter;

/// The generations of a simulation, in order.
///
/// Index `k` is the generation after `k` steps. There is always at least
/// generation zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationHistory {
    generations: Vec<Generation>,
}

impl GenerationHistory {
    /// Starts a history from generation zero.
    pub(crate) fn new(generation_zero: Generation) -> Self {
        GenerationHistory {
            generations: vec![generation_zero],
        }
    }

    /// Appends the next generation.
    pub(crate) fn push(&mut self, generation: Generation) {
        debug_assert_eq!(generation.dimensions(), self.generations[0].dimensions());
        self.generations.push(generation);
    }

    /// Drops everything but generation zero.
    pub(crate) fn reset(&mut self) {
        self.generations.truncate(1);
    }

    /// Number of generations, generation zero included.
    #[inline]
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Always `false`: a history holds at least generation zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Generation zero.
    pub fn first(&self) -> &Generation {
        &self.generations[0]
    }

    /// The latest generation.
    pub fn last(&self) -> &Generation {
        &self.generations[self.generations.len() - 1]
    }

    /// The generation after `index` steps.
    pub fn get(&self, index: usize) -> Option<&Generation> {
        self.generations.get(index)
    }

    /// Iterates from generation zero to the latest.
    pub fn iter(&self) -> Iter<'_, Generation> {
        self.generations.iter()
    }
}

impl<'a> IntoIterator for &'a GenerationHistory {
    type Item = &'a Generation;
    type IntoIter = Iter<'a, Generation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
