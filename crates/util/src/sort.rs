use std::cmp::Ordering;

/// Insertion sort for slices with natural ordering.
///
/// Stable: equal elements keep their relative order, which is what the
/// map-like `sort` contract depends on. Generally faster than the built-in
/// sort for the small slices these containers hold.
///
/// # Examples
///
/// ```
/// use levelset_util::sort::insertion_sort;
///
/// let mut arr = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// insertion_sort(&mut arr);
/// assert_eq!(arr, vec![1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    insertion_sort_by(arr, T::cmp);
}

/// Insertion sort with a custom comparator. Stable.
///
/// # Examples
///
/// ```
/// use levelset_util::sort::insertion_sort_by;
///
/// let mut arr = vec![3, 1, 4, 1, 5];
/// insertion_sort_by(&mut arr, |a, b| b.cmp(a)); // Descending order
/// assert_eq!(arr, vec![5, 4, 3, 1, 1]);
/// ```
pub fn insertion_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = arr.len();
    for i in 1..len {
        let mut j = i;
        while j > 0 && compare(&arr[j - 1], &arr[j]) == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insertion_sort_empty() {
        let mut arr: Vec<i32> = vec![];
        insertion_sort(&mut arr);
        let expected: Vec<i32> = vec![];
        assert_eq!(arr, expected);
    }

    #[test]
    fn test_insertion_sort_random() {
        let mut arr = vec![3, 1, 4, 1, 5, 9, 2, 6];
        insertion_sort(&mut arr);
        assert_eq!(arr, vec![1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_insertion_sort_by_descending() {
        let mut arr = vec![3, 1, 4, 1, 5];
        insertion_sort_by(&mut arr, |a, b| b.cmp(a));
        assert_eq!(arr, vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn test_stability() {
        // Sort pairs by first component only; second component records
        // original order and must survive untouched among equals.
        let mut arr = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        insertion_sort_by(&mut arr, |a, b| a.0.cmp(&b.0));
        assert_eq!(arr, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    proptest! {
        #[test]
        fn prop_matches_std_sort(mut arr in proptest::collection::vec(any::<i32>(), 0..64)) {
            let mut expected = arr.clone();
            expected.sort();
            insertion_sort(&mut arr);
            prop_assert_eq!(arr, expected);
        }
    }
}
