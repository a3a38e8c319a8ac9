use proptest_derive::Arbitrary;

use super::*;
use proptest::prelude::*;

// adds and removes in any order, small values so removes actually hit something
#[derive(Debug, Clone, Copy, Arbitrary)]
enum ContainerOps {
    Add(#[proptest(strategy = "0u8..16")] u8),
    Remove(#[proptest(strategy = "0u8..16")] u8),
}

fn small_values() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-20i32..20, 0..40)
}

fn is_permutation_of(a: &[i32], b: &[i32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

proptest! {
    // Test that the container behaves like a Vec with retain-based removal
    #[test]
    fn test_add_remove_model(ref ops in proptest::collection::vec(any::<ContainerOps>(), 0..100)) {
        let mut container = Container::new();
        let mut model = Vec::new();
        for &op in ops.iter() {
            match op {
                ContainerOps::Add(item) => {
                    container.add(item);
                    model.push(item);
                }
                ContainerOps::Remove(item) => {
                    let expected = model.iter().filter(|&&e| e == item).count();
                    let before = container.len();
                    match container.remove(&item) {
                        Ok(removed) => {
                            prop_assert_eq!(removed, expected);
                            prop_assert_eq!(container.len(), before - removed);
                        }
                        Err(err) => {
                            prop_assert_eq!(expected, 0);
                            prop_assert_eq!(err, ContainerError::NotFound);
                            prop_assert_eq!(container.len(), before);
                        }
                    }
                    model.retain(|&e| e != item);
                }
            }
            prop_assert_eq!(container.as_slice(), model.as_slice());
        }
        prop_assert_eq!(container.order().to_vec(), model);
    }

    // Test that indexed access fails exactly past the end
    #[test]
    fn test_at_bounds(ref values in small_values(), index in 0usize..50) {
        let container = Container::from(values.clone());
        match container.at(index) {
            Ok(elem) => prop_assert_eq!(*elem, values[index]),
            Err(err) => {
                prop_assert!(index >= values.len());
                prop_assert_eq!(err, ContainerError::OutOfRange { index, len: values.len() });
            }
        }
    }

    // Test that ascending and descending mirror each other and hold every element
    #[test]
    fn test_sorted_views(ref values in small_values()) {
        let container = Container::from(values.clone());
        let ascending = container.ascending().to_vec();
        let mut descending = container.descending().to_vec();
        prop_assert_eq!(ascending.len(), values.len());
        prop_assert!(is_permutation_of(&ascending, values));
        prop_assert!(ascending.windows(2).all(|w| w[0] <= w[1]));
        descending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    // Test that side-cross alternates ends of the sorted order without repeating the middle
    #[test]
    fn test_side_cross(ref values in small_values()) {
        let container = Container::from(values.clone());
        let cross = container.side_cross().to_vec();
        let sorted = container.ascending().to_vec();
        prop_assert_eq!(cross.len(), values.len());
        prop_assert!(is_permutation_of(&cross, values));
        for (i, elem) in cross.iter().enumerate() {
            let expected = if i % 2 == 0 { sorted[i / 2] } else { sorted[sorted.len() - 1 - i / 2] };
            prop_assert_eq!(*elem, expected);
        }
    }

    // Test that reverse is exactly insertion order backwards
    #[test]
    fn test_reverse_and_order(ref values in small_values()) {
        let container = Container::from(values.clone());
        let mut reversed = container.reverse().to_vec();
        reversed.reverse();
        prop_assert_eq!(&reversed, values);
        prop_assert_eq!(container.order().to_vec(), reversed);
    }

    // Test that middle-out starts at len / 2 and then steps outwards
    #[test]
    fn test_middle_out(ref values in small_values()) {
        let container = Container::from(values.clone());
        let view = container.middle_out();
        let indices = view.indices();
        prop_assert_eq!(indices.len(), values.len());
        let mut seen = indices.to_vec();
        seen.sort();
        prop_assert!(seen.into_iter().eq(0..values.len()));
        if let Some(&first) = indices.first() {
            prop_assert_eq!(first, values.len() / 2);
        }
        // the distance from the middle never shrinks
        let middle = values.len() as isize / 2;
        let distances: Vec<isize> = indices.iter().map(|&i| (i as isize - middle).abs()).collect();
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    // Test that every view agrees with its cursor walk
    #[test]
    fn test_cursor_walk_matches_iter(ref values in small_values()) {
        let container = Container::from(values.clone());
        let view = container.side_cross();
        let mut walked = Vec::new();
        let mut cursor = view.begin();
        while cursor != view.end() {
            walked.push(*cursor.get().unwrap());
            cursor.advance();
        }
        prop_assert_eq!(walked, view.to_vec());
    }

    // Test that a cloned container is independent of its source
    #[test]
    fn test_clone_independent(ref values in small_values(), extra in any::<i32>()) {
        let source = Container::from(values.clone());
        let mut copy = source.clone();
        prop_assert_eq!(copy.middle_out().to_vec(), source.middle_out().to_vec());
        copy.add(extra);
        prop_assert_eq!(source.as_slice(), values.as_slice());
        prop_assert_eq!(copy.len(), values.len() + 1);
    }
}
