/// Borrows two distinct elements of a slice mutably at the same time.
///
/// Returns `None` when the indices are equal or either is out of range. The
/// returned pair is always in `(a, b)` order regardless of which index is lower.
pub fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= items.len() || b >= items.len() {
        return None;
    }

    let (first, second, flipped) = if a < b { (a, b, false) } else { (b, a, true) };

    let (left, right) = items.split_at_mut(second);
    let first_slot = left.get_mut(first)?;
    let second_slot = right.get_mut(0)?;

    if flipped {
        Some((second_slot, first_slot))
    } else {
        Some((first_slot, second_slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_mut_preserves_argument_order() {
        let mut values = [1, 2, 3, 4];
        let (a, b) = pair_mut(&mut values, 3, 1).expect("distinct indices");
        assert_eq!((*a, *b), (4, 2));
        *a += 10;
        *b += 10;
        assert_eq!(values, [1, 12, 3, 14]);
    }

    #[test]
    fn pair_mut_rejects_aliasing_and_out_of_range() {
        let mut values = [1, 2];
        assert!(pair_mut(&mut values, 0, 0).is_none());
        assert!(pair_mut(&mut values, 0, 2).is_none());
    }
}
