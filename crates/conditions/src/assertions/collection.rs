//! Collection checks
//!
//! A null collection (`None`) has no elements: it is empty, its length is
//! zero, it contains nothing. Cardinality failures report the actual element
//! count, counted without a second pass over the elements.

use crate::engine::{count_elements, violations};
use crate::foundation::{ContractValue, Sequence};

// Element count, `None` for a null collection. The failure path reuses it for
// the context sentence.
fn count_of<C: Sequence>(collection: &C) -> Option<usize> {
    count_elements(collection).map(|(count, _)| count)
}

fn is_empty<C: Sequence>(collection: &C) -> bool {
    match collection.direct_len() {
        Some(len) => len == 0,
        None => collection
            .elements()
            .is_none_or(|mut elements| elements.next().is_none()),
    }
}

fn contains<C>(collection: &C, element: &C::Item) -> bool
where
    C: Sequence,
    C::Item: PartialEq,
{
    collection
        .elements()
        .is_some_and(|mut elements| elements.any(|candidate| candidate == element))
}

conditions! {
    /// Checks on the membership and cardinality of collections.
    ///
    /// Implemented for every [`Sequence`]: `Vec`, slices, arrays, `VecDeque`,
    /// `LinkedList`, `HashSet`, `BTreeSet`, and `Option`s of those.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nebula_conditions::prelude::*;
    ///
    /// let err = requires(vec![1, 2, 3], "ids").is_shorter_than(2).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "ids should contain less than 2 elements. ids currently contains 3 elements."
    /// );
    /// ```
    pub trait CollectionConditions<E>;
    impl<C, E> for Validator<C> where {
        C: ContractValue + Sequence<Item = E>,
        E: ContractValue + PartialEq,
    }
    {
        /// Fails unless the collection is empty or null.
        fn is_empty / is_empty_with(v; description) {
            if is_empty(v.value()) {
                Ok(())
            } else {
                violations::collection_should_be_empty(&v, description)
            }
        }

        /// Fails if the collection is empty or null.
        fn is_not_empty / is_not_empty_with(v; description) {
            if is_empty(v.value()) {
                violations::collection_should_not_be_empty(&v, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the collection contains `element`.
        fn contains / contains_with(v, element: &E; description) {
            if contains(v.value(), element) {
                Ok(())
            } else {
                violations::collection_should_contain(&v, element, description)
            }
        }

        /// Fails if the collection contains `element`.
        fn does_not_contain / does_not_contain_with(v, element: &E; description) {
            if contains(v.value(), element) {
                violations::collection_should_not_contain(&v, element, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the collection contains at least one of `elements`.
        ///
        /// Always fails when `elements` is empty.
        fn contains_any / contains_any_with(v, elements: &[E]; description) {
            if elements.iter().any(|element| contains(v.value(), element)) {
                Ok(())
            } else {
                violations::collection_should_contain_any_of(&v, elements, description)
            }
        }

        /// Fails if the collection contains any of `elements`.
        fn does_not_contain_any / does_not_contain_any_with(v, elements: &[E]; description) {
            if elements.iter().any(|element| contains(v.value(), element)) {
                violations::collection_should_not_contain_any_of(&v, elements, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the collection contains every one of `elements`.
        ///
        /// Always passes when `elements` is empty.
        fn contains_all / contains_all_with(v, elements: &[E]; description) {
            if elements.iter().all(|element| contains(v.value(), element)) {
                Ok(())
            } else {
                violations::collection_should_contain_all_of(&v, elements, description)
            }
        }

        /// Fails if the collection contains every one of `elements`.
        ///
        /// Always fails when `elements` is empty.
        fn does_not_contain_all / does_not_contain_all_with(v, elements: &[E]; description) {
            if elements.iter().all(|element| contains(v.value(), element)) {
                violations::collection_should_not_contain_all_of(&v, elements, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the collection has exactly `count` elements.
        fn has_length / has_length_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) == count {
                Ok(())
            } else {
                violations::collection_should_have_count(&v, count, actual, description)
            }
        }

        /// Fails if the collection has exactly `count` elements.
        fn does_not_have_length / does_not_have_length_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) == count {
                violations::collection_should_not_have_count(&v, count, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the collection has fewer than `count` elements.
        fn is_shorter_than / is_shorter_than_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) < count {
                Ok(())
            } else {
                violations::collection_should_have_less_than(&v, count, actual, description)
            }
        }

        /// Fails if the collection has fewer than `count` elements.
        fn is_not_shorter_than / is_not_shorter_than_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) < count {
                violations::collection_should_not_have_less_than(&v, count, actual, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the collection has at most `count` elements.
        fn is_shorter_or_equal / is_shorter_or_equal_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) <= count {
                Ok(())
            } else {
                violations::collection_should_have_at_most(&v, count, actual, description)
            }
        }

        /// Fails if the collection has at most `count` elements.
        fn is_not_shorter_or_equal / is_not_shorter_or_equal_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) <= count {
                violations::collection_should_not_have_at_most(&v, count, actual, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the collection has more than `count` elements.
        fn is_longer_than / is_longer_than_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) > count {
                Ok(())
            } else {
                violations::collection_should_have_more_than(&v, count, actual, description)
            }
        }

        /// Fails if the collection has more than `count` elements.
        fn is_not_longer_than / is_not_longer_than_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) > count {
                violations::collection_should_not_have_more_than(&v, count, actual, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the collection has at least `count` elements.
        fn is_longer_or_equal / is_longer_or_equal_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) >= count {
                Ok(())
            } else {
                violations::collection_should_have_at_least(&v, count, actual, description)
            }
        }

        /// Fails if the collection has at least `count` elements.
        fn is_not_longer_or_equal / is_not_longer_or_equal_with(v, count: usize; description) {
            let actual = count_of(v.value());
            if actual.unwrap_or(0) >= count {
                violations::collection_should_not_have_at_least(&v, count, actual, description)
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Enumerated, ErrorKind, ensures, requires};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::{BTreeSet, HashSet, VecDeque};

    #[test]
    fn test_emptiness() {
        assert!(requires(Vec::<i32>::new(), "v").is_empty().is_ok());
        assert!(requires(None::<Vec<i32>>, "v").is_empty().is_ok());
        assert!(requires(Enumerated(vec![1]), "v").is_empty().is_err());

        let err = requires(None::<Vec<i32>>, "v").is_not_empty().unwrap_err();
        assert_eq!(err.message(), "v should not be empty.");
        assert_eq!(err.kind(), ErrorKind::ArgumentNull);
    }

    #[test]
    fn test_contains() {
        assert!(requires(vec![1, 2, 3], "v").contains(&2).is_ok());
        assert!(requires(HashSet::from(["a", "b"]), "v").contains(&"b").is_ok());

        let err = requires(vec![1, 2, 3], "v").contains(&4).unwrap_err();
        assert_eq!(err.message(), "v should contain 4.");
        assert_eq!(err.kind(), ErrorKind::Argument);

        let err = requires(VecDeque::from(vec![1]), "v").does_not_contain(&1).unwrap_err();
        assert_eq!(err.message(), "v should not contain 1.");
    }

    #[test]
    fn test_membership_on_null() {
        assert!(requires(None::<Vec<i32>>, "v").contains(&1).is_err());
        assert!(requires(None::<Vec<i32>>, "v").does_not_contain(&1).is_ok());
        assert!(requires(None::<Vec<i32>>, "v").contains_any(&[1]).is_err());
        assert!(requires(None::<Vec<i32>>, "v").does_not_contain_any(&[1]).is_ok());
        assert!(requires(None::<Vec<i32>>, "v").contains_all(&[]).is_ok());
    }

    #[test]
    fn test_any_and_all() {
        let v = || requires(BTreeSet::from([1, 2, 3]), "set");

        assert!(v().contains_any(&[9, 3]).is_ok());
        assert!(v().contains_any(&[]).is_err());
        assert!(v().does_not_contain_any(&[7, 8]).is_ok());
        assert!(v().contains_all(&[1, 3]).is_ok());
        assert!(v().contains_all(&[]).is_ok());
        assert!(v().does_not_contain_all(&[1, 9]).is_ok());
        assert!(v().does_not_contain_all(&[]).is_err());

        let err = v().contains_any(&[8, 9]).unwrap_err();
        assert_eq!(
            err.message(),
            "set should contain at least one of the following elements: {8, 9}."
        );

        let err = v().does_not_contain_any(&[2]).unwrap_err();
        assert_eq!(
            err.message(),
            "set should not contain any of the following elements: {2}."
        );
    }

    #[rstest]
    #[case(0, "v should contain 0 elements. v currently contains 2 elements.")]
    #[case(1, "v should contain 1 element. v currently contains 2 elements.")]
    #[case(3, "v should contain 3 elements. v currently contains 2 elements.")]
    fn test_has_length_pluralization(#[case] count: usize, #[case] expected: &str) {
        let err = requires(vec!['a', 'b'], "v").has_length(count).unwrap_err();
        assert_eq!(err.message(), expected);
    }

    #[test]
    fn test_singular_actual_count() {
        let err = requires([7], "v").is_longer_than(1).unwrap_err();
        assert_eq!(
            err.message(),
            "v should contain more than 1 element. v currently contains 1 element."
        );
    }

    #[test]
    fn test_does_not_have_length_has_no_context() {
        let err = requires(vec![1, 2], "v").does_not_have_length(2).unwrap_err();
        assert_eq!(err.message(), "v should not contain 2 elements.");
    }

    #[test]
    fn test_cardinality_bounds() {
        let v = || requires(vec![1, 2, 3], "v");

        assert!(v().is_shorter_than(4).is_ok());
        assert!(v().is_shorter_than(3).is_err());
        assert!(v().is_not_shorter_than(3).is_ok());
        assert!(v().is_shorter_or_equal(3).is_ok());
        assert!(v().is_not_shorter_or_equal(2).is_ok());
        assert!(v().is_not_shorter_or_equal(3).is_err());
        assert!(v().is_longer_than(2).is_ok());
        assert!(v().is_not_longer_than(3).is_ok());
        assert!(v().is_longer_or_equal(3).is_ok());
        assert!(v().is_not_longer_or_equal(4).is_ok());
        assert!(v().is_not_longer_or_equal(3).is_err());

        let err = v().is_shorter_or_equal(2).unwrap_err();
        assert_eq!(
            err.message(),
            "v should contain 2 or less elements. v currently contains 3 elements."
        );
        let err = v().is_longer_or_equal(5).unwrap_err();
        assert_eq!(
            err.message(),
            "v should contain 5 or more elements. v currently contains 3 elements."
        );
    }

    #[test]
    fn test_null_counts_as_zero() {
        assert!(requires(None::<Vec<u8>>, "v").has_length(0).is_ok());
        assert!(requires(None::<Vec<u8>>, "v").is_shorter_than(1).is_ok());

        let err = requires(None::<Vec<u8>>, "v").is_longer_or_equal(1).unwrap_err();
        assert_eq!(
            err.message(),
            "v should contain 1 or more elements. v is currently a null reference."
        );
    }

    #[test]
    fn test_enumerated_collection_counts() {
        let err = ensures(Enumerated(vec![1, 2, 3]), "items")
            .is_shorter_than(2)
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Postcondition 'items should contain less than 2 elements' failed. \
             items currently contains 3 elements."
        );
    }
}
