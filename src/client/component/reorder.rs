use crate::model::reorder::ReorderItemDto;

/// Moves the item at `index` one slot up (`-1`) or down (`1`) in place.
///
/// Moves past either end are ignored.
pub fn move_item<T>(items: &mut [T], index: usize, offset: isize) {
    let Some(target) = index.checked_add_signed(offset) else {
        return;
    };
    if target < items.len() && index < items.len() {
        items.swap(index, target);
    }
}

/// Builds the reorder request for a locally rearranged list.
///
/// `original` holds `(id, position)` pairs as loaded from the server and `ordered_ids`
/// the ids in their new display order. The existing positions are handed out again in
/// ascending order, so gaps are kept and untouched items never collide with moved ones.
/// Only items whose position changes end up in the request.
pub fn reorder_payload(original: &[(String, i32)], ordered_ids: &[String]) -> Vec<ReorderItemDto> {
    let mut positions: Vec<i32> = original.iter().map(|(_, position)| *position).collect();
    positions.sort_unstable();

    ordered_ids
        .iter()
        .zip(positions)
        .filter(|(id, position)| {
            original
                .iter()
                .any(|(original_id, original_position)| {
                    original_id == *id && original_position != position
                })
        })
        .map(|(id, position)| ReorderItemDto {
            id: id.clone(),
            position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original() -> Vec<(String, i32)> {
        vec![
            ("a".to_string(), 0),
            ("b".to_string(), 2),
            ("c".to_string(), 5),
        ]
    }

    #[test]
    fn moves_within_bounds_only() {
        let mut items = vec!["a", "b", "c"];

        move_item(&mut items, 0, -1);
        assert_eq!(items, vec!["a", "b", "c"]);

        move_item(&mut items, 2, 1);
        assert_eq!(items, vec!["a", "b", "c"]);

        move_item(&mut items, 2, -1);
        assert_eq!(items, vec!["a", "c", "b"]);
    }

    #[test]
    fn reuses_existing_positions() {
        let ordered = vec!["c".to_string(), "a".to_string(), "b".to_string()];

        let payload = reorder_payload(&original(), &ordered);

        assert_eq!(
            payload,
            vec![
                ReorderItemDto { id: "c".to_string(), position: 0 },
                ReorderItemDto { id: "a".to_string(), position: 2 },
                ReorderItemDto { id: "b".to_string(), position: 5 },
            ]
        );
    }

    #[test]
    fn skips_unmoved_items() {
        let ordered = vec!["a".to_string(), "c".to_string(), "b".to_string()];

        let payload = reorder_payload(&original(), &ordered);

        assert_eq!(
            payload,
            vec![
                ReorderItemDto { id: "c".to_string(), position: 2 },
                ReorderItemDto { id: "b".to_string(), position: 5 },
            ]
        );
    }

    #[test]
    fn unchanged_order_is_empty() {
        let ordered = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        assert!(reorder_payload(&original(), &ordered).is_empty());
    }
}
