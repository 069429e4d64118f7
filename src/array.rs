//! Linear scans over ordered sequences.
//!
//! Every function here borrows its input, walks it once from left to right,
//! and reports "nothing found" as `None` rather than a sentinel value.
//!
//! Complexity:
//! - maximum: O(n) time, O(1) space
//! - second_maximum: O(n) time, O(1) space
//! - index_of / position: O(n) time, O(1) space

use std::cmp::Ordering;

/// Return the greatest element, or `None` for an empty sequence.
///
/// When several elements compare equal to the maximum, the first one wins.
pub fn maximum<T: Ord>(items: &[T]) -> Option<&T> {
    return maximum_by(items, T::cmp);
}

/// Like [`maximum`], ordering elements with `compare`.
pub fn maximum_by<T, F>(items: &[T], mut compare: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut iter = items.iter();
    let mut max = iter.next()?;
    for item in iter {
        // Strictly greater only, so earlier ties are kept.
        if compare(item, max) == Ordering::Greater {
            max = item;
        }
    }
    return Some(max);
}

/// Return the largest value strictly below the maximum.
///
/// Duplicates of the maximum do not count, so `[5, 5]` has no second
/// maximum while `[5, 3]` and `[3, 5]` both yield `3`. The result depends
/// only on which values occur, not on their order; among equal candidates
/// the first occurrence is returned.
pub fn second_maximum<T: Ord>(items: &[T]) -> Option<&T> {
    return second_maximum_by(items, T::cmp);
}

/// Like [`second_maximum`], ordering elements with `compare`.
pub fn second_maximum_by<T, F>(items: &[T], mut compare: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut max: Option<&T> = None;
    let mut second: Option<&T> = None;

    for item in items {
        let Some(top) = max else {
            max = Some(item);
            continue;
        };

        match compare(item, top) {
            Ordering::Greater => {
                second = Some(top);
                max = Some(item);
            }
            Ordering::Equal => {}
            Ordering::Less => match second {
                None => second = Some(item),
                Some(runner_up) => {
                    if compare(item, runner_up) == Ordering::Greater {
                        second = Some(item);
                    }
                }
            },
        }
    }

    return second;
}

/// Find the first slot matching `target`.
///
/// A `None` target looks for the first absent slot. A `Some` target is
/// compared with `==` against present slots only; absent slots never match.
pub fn index_of<T: PartialEq>(items: &[Option<T>], target: Option<&T>) -> Option<usize> {
    return match target {
        None => items.iter().position(Option::is_none),
        Some(wanted) => items
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|value| value == wanted)),
    };
}

/// Find the first element equal to `target` in a sequence without gaps.
pub fn position<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    return items.iter().position(|item| item == target);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximum_of_empty_is_none() {
        let empty: [i32; 0] = [];
        assert_eq!(maximum(&empty), None);
    }

    #[test]
    fn maximum_basic() {
        assert_eq!(maximum(&[3, 9, 1, 7]), Some(&9));
        assert_eq!(maximum(&[-4]), Some(&-4));
        assert_eq!(maximum(&["pear", "apple", "quince"]), Some(&"quince"));
    }

    #[test]
    fn maximum_keeps_first_of_equal_elements() {
        let items = [2, 8, 8, 1];
        let max = maximum(&items).unwrap();
        assert!(std::ptr::eq(max, &items[1]));
    }

    #[test]
    fn maximum_by_reverse_finds_minimum() {
        let items = [4, 2, 6, 2];
        let min = maximum_by(&items, |a, b| b.cmp(a)).unwrap();
        assert_eq!(*min, 2);
        assert!(std::ptr::eq(min, &items[1]));
    }

    #[test]
    fn second_maximum_edge_cases() {
        let empty: [i32; 0] = [];
        assert_eq!(second_maximum(&empty), None);
        assert_eq!(second_maximum(&[1]), None);
        assert_eq!(second_maximum(&[5, 5]), None);
        assert_eq!(second_maximum(&[7, 7, 7, 7]), None);
        assert_eq!(second_maximum(&[5, 3]), Some(&3));
        assert_eq!(second_maximum(&[3, 5]), Some(&3));
        assert_eq!(second_maximum(&[3, 5, 5, 1]), Some(&3));
    }

    #[test]
    fn second_maximum_ignores_values_between_updates() {
        // 4 arrives while 6 is the runner-up and must not displace it.
        assert_eq!(second_maximum(&[1, 6, 9, 4, 8, 2]), Some(&8));
        assert_eq!(second_maximum(&[9, 1, 2, 3]), Some(&3));
        assert_eq!(second_maximum(&[1, 2, 3, 9]), Some(&3));
    }

    #[test]
    fn second_maximum_keeps_first_of_equal_runners_up() {
        let items = [3, 9, 3, 1];
        let second = second_maximum(&items).unwrap();
        assert!(std::ptr::eq(second, &items[0]));
    }

    #[test]
    fn second_maximum_by_key() {
        let words = ["aa", "b", "cccc", "ddd"];
        let second = second_maximum_by(&words, |a, b| a.len().cmp(&b.len()));
        assert_eq!(second, Some(&"ddd"));
    }

    #[test]
    fn index_of_present_target() {
        let slots = [Some(4), None, Some(7), Some(4)];
        assert_eq!(index_of(&slots, Some(&4)), Some(0));
        assert_eq!(index_of(&slots, Some(&7)), Some(2));
        assert_eq!(index_of(&slots, Some(&5)), None);
    }

    #[test]
    fn index_of_absent_target() {
        assert_eq!(index_of(&[Some(1), None, None], None), Some(1));
        assert_eq!(index_of(&[Some(1), Some(2)], None), None);
    }

    #[test]
    fn index_of_skips_absent_slots() {
        let slots = [None, None, Some("x")];
        assert_eq!(index_of(&slots, Some(&"x")), Some(2));
    }

    #[test]
    fn index_of_empty() {
        let empty: [Option<u8>; 0] = [];
        assert_eq!(index_of(&empty, Some(&1)), None);
        assert_eq!(index_of(&empty, None), None);
    }

    #[test]
    fn position_basic() {
        assert_eq!(position(&[1, 2, 3, 2], &2), Some(1));
        assert_eq!(position(&[1, 2, 3], &4), None);
        assert_eq!(position::<i32>(&[], &0), None);
    }
}
