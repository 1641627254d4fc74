//! Offset mapping between a source text and its transcoded form.
//!
//! A transcoder records [`Mapping`] breakpoints in increasing order on both
//! sides. Between breakpoints the two texts advance in lockstep.

/// A breakpoint: offset `from` in the source corresponds to `to` in the
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mapping {
    pub from: usize,
    pub to: usize,
}

impl Mapping {
    #[inline]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// The same offset on both sides.
    #[inline]
    pub const fn identity(x: usize) -> Self {
        Self { from: x, to: x }
    }

    /// Swap source and destination.
    #[inline]
    pub const fn invert(self) -> Self {
        Self { from: self.to, to: self.from }
    }

    /// Component-wise sum, or `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Mapping) -> Option<Mapping> {
        Some(Self { from: self.from.checked_add(other.from)?, to: self.to.checked_add(other.to)? })
    }
}

/// Translate a source offset to the destination.
pub fn src_to_dst(map: &[Mapping], from: usize) -> usize {
    translate(map, from, |m| m.from, |m| m.to)
}

/// Translate a destination offset back to the source.
pub fn dst_to_src(map: &[Mapping], to: usize) -> usize {
    translate(map, to, |m| m.to, |m| m.from)
}

/// An exact breakpoint hit yields its other side. Otherwise the nearest
/// preceding breakpoint is extended by the distance past it. Offsets before
/// the first breakpoint are unaffected by it, but never run past it.
fn translate(map: &[Mapping], x: usize, key: impl Fn(&Mapping) -> usize, other: impl Fn(&Mapping) -> usize) -> usize {
    let first = match map.first() {
        Some(first) => first,
        None => return x,
    };
    match map.binary_search_by_key(&x, &key) {
        Ok(i) => other(&map[i]),
        Err(0) => x.min(other(first)),
        Err(i) => {
            let prev = &map[i - 1];
            other(prev).saturating_add(x - key(prev))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_map() -> Vec<Mapping> {
        // "a&amp;b&lt;c" -> "a&b<c"
        vec![Mapping::new(1, 1), Mapping::new(6, 2), Mapping::new(7, 3), Mapping::new(11, 4)]
    }

    #[test]
    fn test_empty_map_is_identity() {
        assert_eq!(src_to_dst(&[], 17), 17);
        assert_eq!(dst_to_src(&[], 17), 17);
    }

    #[test]
    fn test_src_to_dst() {
        let map = decoded_map();
        assert_eq!(src_to_dst(&map, 0), 0);
        assert_eq!(src_to_dst(&map, 1), 1);
        assert_eq!(src_to_dst(&map, 6), 2);
        assert_eq!(src_to_dst(&map, 11), 4);
        assert_eq!(src_to_dst(&map, 12), 5);
    }

    #[test]
    fn test_dst_to_src() {
        let map = decoded_map();
        assert_eq!(dst_to_src(&map, 0), 0);
        assert_eq!(dst_to_src(&map, 2), 6);
        assert_eq!(dst_to_src(&map, 3), 7);
        assert_eq!(dst_to_src(&map, 5), 12);
    }

    #[test]
    fn test_before_first_breakpoint_is_clamped() {
        let map = vec![Mapping::new(4, 2)];
        assert_eq!(src_to_dst(&map, 3), 2);
        assert_eq!(src_to_dst(&map, 1), 1);
    }

    #[test]
    fn test_arithmetic() {
        let m = Mapping::new(3, 5);
        assert_eq!(m.invert(), Mapping::new(5, 3));
        assert_eq!(m.checked_add(Mapping::identity(2)), Some(Mapping::new(5, 7)));
        assert_eq!(m.checked_add(Mapping::new(usize::MAX, 0)), None);
        assert_eq!(Mapping::default(), Mapping::identity(0));
    }
}
