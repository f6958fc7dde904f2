use glam::Vec2;

use crate::core::body::Body;

/// Iterator over every unordered index pair `(i, j)` with `i < j`, in ascending order.
#[derive(Debug, Clone)]
pub struct AllPairs {
    count: usize,
    i: usize,
    j: usize,
}

impl AllPairs {
    pub fn new(count: usize) -> Self {
        Self { count, i: 0, j: 1 }
    }

    /// Number of pairs for `count` bodies.
    pub fn pair_count(count: usize) -> usize {
        count * count.saturating_sub(1) / 2
    }
}

impl Iterator for AllPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i + 1 < self.count {
            if self.j < self.count {
                let pair = (self.i, self.j);
                self.j += 1;
                return Some(pair);
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

/// Broad phase for the arena: every pair is a candidate, with a cheap
/// bounding-box test in front of the exact circle check.
pub struct BroadPhase;

impl BroadPhase {
    /// `false` only when the circles' bounding boxes are disjoint, which implies
    /// the circles cannot overlap.
    pub fn may_overlap(a: &Body, b: &Body) -> bool {
        let reach = a.radius() + b.radius();
        let delta = (a.position - b.position).abs();
        delta.cmplt(Vec2::splat(reach)).all()
    }
}

/// Mutable access to two distinct bodies, returned in `(i, j)` order.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> Option<(&mut Body, &mut Body)> {
    if i == j || i.max(j) >= bodies.len() {
        return None;
    }

    let (first, second, flipped) = if i < j { (i, j, false) } else { (j, i, true) };
    let (left, right) = bodies.split_at_mut(second);
    let first_slot = &mut left[first];
    let second_slot = &mut right[0];

    if flipped {
        Some((second_slot, first_slot))
    } else {
        Some((first_slot, second_slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::types::Color, utils::allocator::BodyHandle};

    fn circle(x: f32, y: f32, radius: f32) -> Body {
        Body::new(BodyHandle::from_raw(0), Vec2::new(x, y), radius, Color::RED)
    }

    #[test]
    fn all_pairs_is_ascending_and_complete() {
        let pairs: Vec<_> = AllPairs::new(4).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(AllPairs::pair_count(4), pairs.len());
    }

    #[test]
    fn all_pairs_handles_tiny_worlds() {
        assert_eq!(AllPairs::new(0).count(), 0);
        assert_eq!(AllPairs::new(1).count(), 0);
        assert_eq!(AllPairs::new(2).collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn bounding_box_rejects_far_pairs() {
        assert!(BroadPhase::may_overlap(&circle(0.0, 0.0, 10.0), &circle(15.0, 0.0, 10.0)));
        assert!(!BroadPhase::may_overlap(&circle(0.0, 0.0, 10.0), &circle(25.0, 0.0, 10.0)));
        // Diagonal neighbours pass the box test even though the circles are apart.
        assert!(BroadPhase::may_overlap(&circle(0.0, 0.0, 10.0), &circle(15.0, 15.0, 10.0)));
    }

    #[test]
    fn pair_mut_preserves_requested_order() {
        let mut bodies = vec![circle(0.0, 0.0, 1.0), circle(5.0, 0.0, 2.0)];
        let (a, b) = pair_mut(&mut bodies, 1, 0).expect("distinct indices");
        assert_eq!(a.radius(), 2.0);
        assert_eq!(b.radius(), 1.0);
        assert!(pair_mut(&mut bodies, 1, 1).is_none());
        assert!(pair_mut(&mut bodies, 0, 2).is_none());
    }
}
