//! Name-keyed, insertion-ordered collection.
//!
//! Elements must implement [`Named`]; the trait bound replaces any runtime
//! type check. Names are unique within a collection and there is no removal.

use super::error::{ElementKind, StateError};
use std::collections::HashMap;

/// Capability of exposing a stable name.
pub trait Named {
    /// Name identifying this element within its collection.
    fn name(&self) -> &str;
}

impl<T: Named + ?Sized> Named for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Append-only collection of uniquely named elements.
///
/// # Example
///
/// ```rust
/// use stateflow::core::{ElementKind, Flag, NamedCollection};
///
/// let flags = NamedCollection::new(
///     ElementKind::Flag,
///     vec![Flag::new("x"), Flag::new("y")],
/// )
/// .unwrap();
///
/// assert!(flags.has("x"));
/// assert!(!flags.has("z"));
/// assert_eq!(flags.names().collect::<Vec<_>>(), vec!["x", "y"]);
/// ```
#[derive(Debug, Clone)]
pub struct NamedCollection<T: Named> {
    kind: ElementKind,
    elements: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Named> NamedCollection<T> {
    /// Create an empty collection for elements of `kind`.
    pub fn empty(kind: ElementKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a collection from initial elements, rejecting duplicate names.
    pub fn new<I>(kind: ElementKind, elements: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::empty(kind);
        for element in elements {
            collection.add(element)?;
        }
        Ok(collection)
    }

    /// Append an element. Fails if its name is already taken.
    pub fn add(&mut self, element: T) -> Result<(), StateError> {
        let name = element.name();
        if self.index.contains_key(name) {
            return Err(StateError::DuplicateName {
                kind: self.kind,
                name: name.to_string(),
            });
        }
        self.index.insert(name.to_string(), self.elements.len());
        self.elements.push(element);
        Ok(())
    }

    /// Exact, case-sensitive membership test.
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up an element by name.
    pub fn get(&self, name: &str) -> Result<&T, StateError> {
        self.index
            .get(name)
            .map(|&position| &self.elements[position])
            .ok_or_else(|| StateError::NotFound {
                kind: self.kind,
                name: name.to_string(),
            })
    }

    /// All elements in insertion order.
    pub fn all(&self) -> &[T] {
        &self.elements
    }

    /// Iterate elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Element names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().map(Named::name)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Kind of element held, as reported in errors.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }
}

impl<'a, T: Named> IntoIterator for &'a NamedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        payload: u8,
    }

    impl Named for Item {
        fn name(&self) -> &str {
            self.name
        }
    }

    fn item(name: &'static str, payload: u8) -> Item {
        Item { name, payload }
    }

    #[test]
    fn membership_is_exact() {
        let items =
            NamedCollection::new(ElementKind::Event, vec![item("x", 1), item("y", 2)]).unwrap();

        assert!(items.has("x"));
        assert!(items.has("y"));
        assert!(!items.has("z"));
        assert!(!items.has("X"));
    }

    #[test]
    fn all_preserves_insertion_order() {
        let items =
            NamedCollection::new(ElementKind::Event, vec![item("x", 1), item("y", 2)]).unwrap();

        assert_eq!(items.all(), &[item("x", 1), item("y", 2)]);
    }

    #[test]
    fn construction_rejects_duplicate_names() {
        let result = NamedCollection::new(ElementKind::Flag, vec![item("x", 1), item("x", 2)]);

        assert_eq!(
            result.unwrap_err(),
            StateError::DuplicateName {
                kind: ElementKind::Flag,
                name: "x".to_string(),
            }
        );
    }

    #[test]
    fn add_rejects_duplicate_and_keeps_original() {
        let mut items = NamedCollection::new(ElementKind::Event, vec![item("x", 1)]).unwrap();

        let result = items.add(item("x", 9));

        assert!(matches!(result, Err(StateError::DuplicateName { .. })));
        assert_eq!(items.len(), 1);
        assert_eq!(items.get("x").unwrap().payload, 1);
    }

    #[test]
    fn get_missing_reports_kind_and_name() {
        let items: NamedCollection<Item> = NamedCollection::empty(ElementKind::Flag);

        let err = items.get("missing").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No flag named 'missing'");
    }

    #[test]
    fn boxed_elements_are_named() {
        let mut items: NamedCollection<Box<Item>> = NamedCollection::empty(ElementKind::Event);
        items.add(Box::new(item("boxed", 0))).unwrap();

        assert!(items.has("boxed"));
        assert_eq!(items.names().collect::<Vec<_>>(), vec!["boxed"]);
    }
}
