//! Index ranges of the three network layers.
//!
//! All indices are 1-based. The iterators below fix the canonical row order
//! of every constraint family, which is what makes the output reproducible.

use crate::problem::Dimensions;
use std::ops::RangeInclusive;

/// Enumerates valid `(source, transit, destination)` index combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpace {
    dims: Dimensions,
}

impl IndexSpace {
    pub fn new(dims: Dimensions) -> Self {
        Self { dims }
    }

    pub fn sources(&self) -> RangeInclusive<u32> {
        1..=self.dims.sources
    }

    pub fn transits(&self) -> RangeInclusive<u32> {
        1..=self.dims.transits
    }

    pub fn dests(&self) -> RangeInclusive<u32> {
        1..=self.dims.dests
    }

    /// `(i, j)` with the source index outermost.
    pub fn source_dest(&self) -> impl Iterator<Item = (u32, u32)> {
        let dests = self.dests();
        self.sources()
            .flat_map(move |i| dests.clone().map(move |j| (i, j)))
    }

    /// `(i, k)` with the source index outermost.
    pub fn source_transit(&self) -> impl Iterator<Item = (u32, u32)> {
        let transits = self.transits();
        self.sources()
            .flat_map(move |i| transits.clone().map(move |k| (i, k)))
    }

    /// `(k, j)` with the transit index outermost.
    pub fn transit_dest(&self) -> impl Iterator<Item = (u32, u32)> {
        let dests = self.dests();
        self.transits()
            .flat_map(move |k| dests.clone().map(move |j| (k, j)))
    }

    /// Every path `(i, k, j)`, ordered source, transit, destination.
    pub fn paths(&self) -> impl Iterator<Item = (u32, u32, u32)> {
        let transits = self.transits();
        let dests = self.dests();
        self.sources().flat_map(move |i| {
            let dests = dests.clone();
            transits
                .clone()
                .flat_map(move |k| dests.clone().map(move |j| (i, k, j)))
        })
    }

    pub fn path_count(&self) -> usize {
        self.dims.sources as usize * self.dims.transits as usize * self.dims.dests as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(s: u32, t: u32, d: u32) -> IndexSpace {
        IndexSpace::new(Dimensions::new(s, t, d).unwrap())
    }

    #[test]
    fn test_pair_orders() {
        let space = space(2, 3, 2);
        let sd: Vec<_> = space.source_dest().collect();
        assert_eq!(sd, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);

        let td: Vec<_> = space.transit_dest().collect();
        assert_eq!(td.first(), Some(&(1, 1)));
        assert_eq!(td.get(1), Some(&(1, 2)));
        assert_eq!(td.len(), 6);

        assert_eq!(space.source_transit().count(), 6);
    }

    #[test]
    fn test_paths_cover_cube() {
        let space = space(2, 3, 4);
        let paths: Vec<_> = space.paths().collect();
        assert_eq!(paths.len(), space.path_count());
        assert_eq!(paths[0], (1, 1, 1));
        assert_eq!(paths[1], (1, 1, 2));
        assert_eq!(paths[4], (1, 2, 1));
        assert_eq!(*paths.last().unwrap(), (2, 3, 4));
    }
}
