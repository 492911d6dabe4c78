//! Element access for collection conditions
//!
//! [`Sequence`] is the capability collection assertions rely on: iterate the
//! elements, and optionally report the element count in O(1). A `None`
//! element stream means the collection itself is a null reference.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

use crate::foundation::ContractValue;

/// Borrowed, boxed element iterator.
pub type Elements<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// A collection whose elements can be counted and searched.
///
/// # Examples
///
/// ```rust
/// use nebula_conditions::Sequence;
///
/// let items = vec![1, 2, 3];
/// assert_eq!(items.direct_len(), Some(3));
/// assert_eq!(items.elements().map(Iterator::count), Some(3));
/// assert!(None::<Vec<i32>>.elements().is_none());
/// ```
pub trait Sequence {
    /// Element type.
    type Item;

    /// Iterates the elements, or returns `None` for a null collection.
    fn elements(&self) -> Option<Elements<'_, Self::Item>>;

    /// Element count, when the collection can report it without iterating.
    fn direct_len(&self) -> Option<usize> {
        None
    }
}

macro_rules! sized_sequences {
    ($($coll:ident<T $(, $extra:ident)*>),* $(,)?) => {
        $(
            impl<T $(, $extra)*> Sequence for $coll<T $(, $extra)*> {
                type Item = T;

                fn elements(&self) -> Option<Elements<'_, T>> {
                    Some(Box::new(self.iter()))
                }

                fn direct_len(&self) -> Option<usize> {
                    Some(self.len())
                }
            }
        )*
    };
}

sized_sequences!(Vec<T>, VecDeque<T>, LinkedList<T>, BTreeSet<T>, HashSet<T, S>);

impl<T> Sequence for [T] {
    type Item = T;

    fn elements(&self) -> Option<Elements<'_, T>> {
        Some(Box::new(self.iter()))
    }

    fn direct_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn elements(&self) -> Option<Elements<'_, T>> {
        Some(Box::new(self.iter()))
    }

    fn direct_len(&self) -> Option<usize> {
        Some(N)
    }
}

impl<C: Sequence + ?Sized> Sequence for &C {
    type Item = C::Item;

    fn elements(&self) -> Option<Elements<'_, C::Item>> {
        (**self).elements()
    }

    fn direct_len(&self) -> Option<usize> {
        (**self).direct_len()
    }
}

impl<C: Sequence + ?Sized> Sequence for Box<C> {
    type Item = C::Item;

    fn elements(&self) -> Option<Elements<'_, C::Item>> {
        (**self).elements()
    }

    fn direct_len(&self) -> Option<usize> {
        (**self).direct_len()
    }
}

impl<C: Sequence> Sequence for Option<C> {
    type Item = C::Item;

    fn elements(&self) -> Option<Elements<'_, C::Item>> {
        self.as_ref().and_then(Sequence::elements)
    }

    fn direct_len(&self) -> Option<usize> {
        self.as_ref().and_then(Sequence::direct_len)
    }
}

// ============================================================================
// ENUMERATED
// ============================================================================

/// Hides the wrapped collection's direct count, forcing one full enumeration.
///
/// Useful for collections whose `len` is itself expensive, and for exercising
/// the enumeration path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Enumerated<C>(pub C);

impl<C: Sequence> Sequence for Enumerated<C> {
    type Item = C::Item;

    fn elements(&self) -> Option<Elements<'_, C::Item>> {
        self.0.elements()
    }
}

impl<C: ContractValue> ContractValue for Enumerated<C> {
    const IS_ENUM: bool = C::IS_ENUM;

    fn render(&self) -> String {
        self.0.render()
    }

    fn is_null(&self) -> bool {
        self.0.is_null()
    }

    fn type_name(&self) -> &'static str {
        self.0.type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_len_for_std_collections() {
        assert_eq!(vec![1, 2].direct_len(), Some(2));
        assert_eq!([1, 2, 3].direct_len(), Some(3));
        assert_eq!(HashSet::<i32>::new().direct_len(), Some(0));
        assert_eq!(Some(vec!['a']).direct_len(), Some(1));
        assert_eq!(None::<Vec<char>>.direct_len(), None);
    }

    #[test]
    fn test_enumerated_hides_len() {
        let wrapped = Enumerated(vec![1, 2, 3]);
        assert_eq!(wrapped.direct_len(), None);
        assert_eq!(wrapped.elements().map(Iterator::count), Some(3));
    }

    #[test]
    fn test_null_collection_has_no_elements() {
        assert!(None::<Vec<u8>>.elements().is_none());
        assert!(Enumerated(None::<Vec<u8>>).elements().is_none());
    }
}
