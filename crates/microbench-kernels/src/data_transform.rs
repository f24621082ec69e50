//! Struct array construction.

/// Number of records the program builds.
pub const ITEM_COUNT: i32 = 10_000;

/// A fixed-size record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub value: i32,
    pub doubled: i32,
}

impl Item {
    /// Record for index `i`: `id = value = i`, `doubled = 2 * i`.
    #[must_use]
    pub const fn new(i: i32) -> Self {
        Self {
            id: i,
            value: i,
            doubled: i * 2,
        }
    }
}

/// Allocates `count` records once and fills them in index order.
///
/// A non-positive count yields an empty array.
#[must_use]
pub fn build_items(count: i32) -> Vec<Item> {
    let mut items = Vec::with_capacity(count.max(0) as usize);
    for i in 0..count {
        items.push(Item::new(i));
    }
    items
}

/// Builds the records and returns how many there are; this is what the
/// program prints.
#[must_use]
pub fn transform_count(count: i32) -> usize {
    build_items(count).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_items_empty() {
        assert!(build_items(0).is_empty());
        assert!(build_items(-1).is_empty());
    }

    #[test]
    fn test_build_items_fields() {
        let items = build_items(4);
        assert_eq!(
            items,
            vec![Item::new(0), Item::new(1), Item::new(2), Item::new(3)]
        );
        assert_eq!(items[3].doubled, 6);
    }

    #[test]
    fn test_build_items_invariants() {
        for (idx, item) in build_items(ITEM_COUNT).iter().enumerate() {
            assert_eq!(item.id as usize, idx);
            assert_eq!(item.value, item.id);
            assert_eq!(item.doubled, 2 * item.value);
        }
    }

    #[test]
    fn test_transform_count_program() {
        assert_eq!(transform_count(ITEM_COUNT), 10_000);
    }
}
