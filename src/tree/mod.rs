use crate::models::{NavigationFormData, NavigationItem};

/// Items at this depth (root level is 0) may not receive children.
pub(crate) const MAX_DEPTH: usize = 5;

/// Outcome of a rejected tree operation.
///
/// None of these are fatal: the caller keeps its current tree and decides
/// whether to tell the user. The display strings are the user-facing
/// messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub(crate) enum TreeError {
    #[strum(to_string = "Menu item not found")]
    NotFound,

    #[strum(to_string = "The maximum nesting depth is 5")]
    DepthLimitExceeded,

    #[strum(to_string = "An item cannot be moved into its own submenu")]
    InvalidMove,
}

/// Result of planning a drop gesture.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MovePlan {
    /// The tree to commit in place of the current one.
    Apply(Vec<NavigationItem>),
    /// Nothing to do (dropped onto itself or outside any item).
    NoOp,
}

/// Find an item anywhere in the tree by id, depth-first in preorder.
///
/// Returns the index path from the root sequence to the item: the last
/// element is the item's index within its containing sequence, and
/// `path.len() - 1` is its depth. Every sequence in the tree is
/// addressable this way, whatever its nesting.
pub(crate) fn locate(items: &[NavigationItem], id: &str) -> Option<Vec<usize>> {
    for (index, item) in items.iter().enumerate() {
        if item.id == id {
            return Some(vec![index]);
        }
        if let Some(mut rest) = locate(&item.children, id) {
            let mut path = Vec::with_capacity(rest.len() + 1);
            path.push(index);
            path.append(&mut rest);
            return Some(path);
        }
    }
    None
}

/// Resolve an index path to the item it points at.
pub(crate) fn item_at<'a>(
    items: &'a [NavigationItem],
    path: &[usize],
) -> Option<&'a NavigationItem> {
    let (&index, rest) = path.split_first()?;
    let item = items.get(index)?;
    if rest.is_empty() {
        Some(item)
    } else {
        item_at(&item.children, rest)
    }
}

fn item_at_mut<'a>(
    items: &'a mut [NavigationItem],
    path: &[usize],
) -> Option<&'a mut NavigationItem> {
    let (&index, rest) = path.split_first()?;
    let item = items.get_mut(index)?;
    if rest.is_empty() {
        Some(item)
    } else {
        item_at_mut(&mut item.children, rest)
    }
}

/// Resolve an index path to the sequence that directly contains the item
/// (the root sequence or some item's `children`) plus the item's index in
/// it, ready to splice.
fn containing_sequence_mut<'a>(
    items: &'a mut Vec<NavigationItem>,
    path: &[usize],
) -> Option<(&'a mut Vec<NavigationItem>, usize)> {
    match path {
        [] => None,
        [index] => Some((items, *index)),
        [index, rest @ ..] => {
            let item = items.get_mut(*index)?;
            containing_sequence_mut(&mut item.children, rest)
        }
    }
}

/// Append a new item to the root sequence, or to `parent_id`'s children.
///
/// The caller mints the unique id before calling. Parents already at the
/// maximum depth are rejected and the input tree stays as it was.
pub(crate) fn add_item(
    items: &[NavigationItem],
    item: NavigationItem,
    parent_id: Option<&str>,
) -> Result<Vec<NavigationItem>, TreeError> {
    let mut next = items.to_vec();

    let Some(parent_id) = parent_id else {
        next.push(item);
        return Ok(next);
    };

    let path = locate(items, parent_id).ok_or(TreeError::NotFound)?;
    if path.len() - 1 >= MAX_DEPTH {
        return Err(TreeError::DepthLimitExceeded);
    }

    let parent = item_at_mut(&mut next, &path).ok_or(TreeError::NotFound)?;
    parent.children.push(item);
    Ok(next)
}

/// Replace the label and url of the matching item. Its id and children
/// are never touched by an update.
pub(crate) fn update_item(
    items: &[NavigationItem],
    id: &str,
    data: &NavigationFormData,
) -> Result<Vec<NavigationItem>, TreeError> {
    let path = locate(items, id).ok_or(TreeError::NotFound)?;

    let mut next = items.to_vec();
    let item = item_at_mut(&mut next, &path).ok_or(TreeError::NotFound)?;
    item.label = data.label.clone();
    item.url = data.url.clone();
    Ok(next)
}

/// Splice the matching item out of its containing sequence. Its subtree
/// goes with it; orphans are never re-parented.
pub(crate) fn remove_item(
    items: &[NavigationItem],
    id: &str,
) -> Result<Vec<NavigationItem>, TreeError> {
    let path = locate(items, id).ok_or(TreeError::NotFound)?;

    let mut next = items.to_vec();
    let (sequence, index) = containing_sequence_mut(&mut next, &path).ok_or(TreeError::NotFound)?;
    sequence.remove(index);
    Ok(next)
}

/// Translate a drop gesture into a structural move.
///
/// The source is spliced out of its containing sequence and re-inserted
/// at the target's index: the moved item takes the target's former slot
/// and the target shifts right. Same-sequence reorders and cross-parent
/// moves go through this one path.
///
/// Dropping an item onto its own subtree is rejected; the splice-out
/// would take the target away with it.
pub(crate) fn plan_move(
    items: &[NavigationItem],
    source_id: &str,
    target_id: Option<&str>,
) -> Result<MovePlan, TreeError> {
    let Some(target_id) = target_id else {
        return Ok(MovePlan::NoOp);
    };
    if source_id == target_id {
        return Ok(MovePlan::NoOp);
    }

    let source_path = locate(items, source_id).ok_or(TreeError::NotFound)?;
    let target_path = locate(items, target_id).ok_or(TreeError::NotFound)?;
    if target_path.starts_with(&source_path) {
        return Err(TreeError::InvalidMove);
    }

    let mut next = items.to_vec();
    let (sequence, index) =
        containing_sequence_mut(&mut next, &source_path).ok_or(TreeError::NotFound)?;
    let moved = sequence.remove(index);

    // Splicing the source out may have shifted the target's indices, so
    // it has to be found again on the already-spliced tree.
    let target_path = locate(&next, target_id).ok_or(TreeError::NotFound)?;
    let (sequence, index) =
        containing_sequence_mut(&mut next, &target_path).ok_or(TreeError::NotFound)?;
    sequence.insert(index, moved);

    Ok(MovePlan::Apply(next))
}

/// Total number of items in the tree, subtrees included.
pub(crate) fn count_items(items: &[NavigationItem]) -> usize {
    items
        .iter()
        .map(|item| 1 + count_items(&item.children))
        .sum()
}

/// Number of items carrying a url.
pub(crate) fn count_links(items: &[NavigationItem]) -> usize {
    items
        .iter()
        .map(|item| usize::from(item.url.is_some()) + count_links(&item.children))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All ids in the tree, in preorder.
    fn collect_ids(items: &[NavigationItem]) -> Vec<String> {
        let mut out = Vec::new();
        for item in items {
            out.push(item.id.clone());
            out.extend(collect_ids(&item.children));
        }
        out
    }

    fn item(id: &str, label: &str) -> NavigationItem {
        NavigationItem {
            id: id.to_string(),
            label: label.to_string(),
            url: None,
            children: vec![],
        }
    }

    fn link(id: &str, label: &str, url: &str) -> NavigationItem {
        NavigationItem {
            url: Some(url.to_string()),
            ..item(id, label)
        }
    }

    fn branch(id: &str, label: &str, children: Vec<NavigationItem>) -> NavigationItem {
        NavigationItem {
            children,
            ..item(id, label)
        }
    }

    fn form(label: &str, url: Option<&str>) -> NavigationFormData {
        NavigationFormData {
            label: label.to_string(),
            url: url.map(str::to_string),
        }
    }

    fn sample_tree() -> Vec<NavigationItem> {
        vec![
            link("home", "Home", "https://example.com/"),
            branch(
                "shop",
                "Shop",
                vec![
                    link("sale", "Sale", "https://example.com/sale"),
                    branch("clothing", "Clothing", vec![item("shoes", "Shoes")]),
                ],
            ),
            item("about", "About"),
        ]
    }

    /// One item per level: `d0` at depth 0 down to `d{depth}` at `depth`.
    fn chain_to_depth(depth: usize) -> Vec<NavigationItem> {
        let mut node = item(&format!("d{depth}"), "leaf");
        for level in (0..depth).rev() {
            node = branch(&format!("d{level}"), "level", vec![node]);
        }
        vec![node]
    }

    #[test]
    fn locate_returns_the_index_path_of_a_nested_item() {
        let tree = sample_tree();
        assert_eq!(locate(&tree, "home"), Some(vec![0]));
        assert_eq!(locate(&tree, "shoes"), Some(vec![1, 1, 0]));

        let path = locate(&tree, "sale").unwrap();
        assert_eq!(item_at(&tree, &path).unwrap().id, "sale");
    }

    #[test]
    fn locate_finds_every_present_id() {
        let tree = sample_tree();
        for id in collect_ids(&tree) {
            let path = locate(&tree, &id).expect("present id should be found");
            assert_eq!(item_at(&tree, &path).unwrap().id, id);
        }
    }

    #[test]
    fn locate_missing_id_is_a_normal_outcome() {
        assert_eq!(locate(&sample_tree(), "missing"), None);
        assert_eq!(locate(&[], "missing"), None);
    }

    #[test]
    fn add_without_parent_appends_to_the_root() {
        let tree = sample_tree();
        let next = add_item(&tree, item("contact", "Contact"), None).unwrap();
        assert_eq!(next.len(), tree.len() + 1);
        assert_eq!(locate(&next, "contact"), Some(vec![3]));
    }

    #[test]
    fn add_with_parent_appends_to_its_children() {
        let tree = sample_tree();
        let next = add_item(&tree, item("hats", "Hats"), Some("clothing")).unwrap();
        assert_eq!(locate(&next, "hats"), Some(vec![1, 1, 1]));

        let parent = item_at(&next, &[1, 1]).unwrap();
        assert_eq!(parent.children.last().unwrap().id, "hats");
    }

    #[test]
    fn add_under_missing_parent_fails() {
        assert_eq!(
            add_item(&sample_tree(), item("x", "X"), Some("missing")),
            Err(TreeError::NotFound)
        );
    }

    #[test]
    fn add_under_a_parent_at_the_depth_limit_is_rejected() {
        let tree = chain_to_depth(MAX_DEPTH);
        let before = tree.clone();

        assert_eq!(
            add_item(&tree, item("x", "X"), Some("d5")),
            Err(TreeError::DepthLimitExceeded)
        );
        assert_eq!(tree, before);

        // One level up still accepts children.
        let next = add_item(&tree, item("x", "X"), Some("d4")).unwrap();
        assert_eq!(locate(&next, "x").unwrap().len() - 1, MAX_DEPTH);
    }

    #[test]
    fn update_replaces_label_and_url_only() {
        let tree = sample_tree();
        let next =
            update_item(&tree, "shop", &form("Store", Some("https://example.com/store"))).unwrap();

        let updated = item_at(&next, &locate(&next, "shop").unwrap()).unwrap();
        assert_eq!(updated.id, "shop");
        assert_eq!(updated.label, "Store");
        assert_eq!(updated.url.as_deref(), Some("https://example.com/store"));
        assert_eq!(updated.children, tree[1].children);

        // Every other item is untouched.
        assert_eq!(next[0], tree[0]);
        assert_eq!(next[2], tree[2]);
    }

    #[test]
    fn update_is_idempotent() {
        let tree = sample_tree();
        let data = form("Store", None);
        let once = update_item(&tree, "shop", &data).unwrap();
        let twice = update_item(&once, "shop", &data).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn update_missing_id_fails() {
        assert_eq!(
            update_item(&sample_tree(), "missing", &form("X", None)),
            Err(TreeError::NotFound)
        );
    }

    #[test]
    fn remove_drops_the_item_and_its_subtree() {
        let tree = sample_tree();
        let next = remove_item(&tree, "shop").unwrap();

        // "shop" holds three descendants, so four items disappear.
        assert_eq!(count_items(&next), count_items(&tree) - 4);
        assert_eq!(locate(&next, "shop"), None);
        assert_eq!(locate(&next, "shoes"), None);
    }

    #[test]
    fn remove_a_leaf_drops_exactly_one_item() {
        let tree = sample_tree();
        let next = remove_item(&tree, "shoes").unwrap();
        assert_eq!(count_items(&next), count_items(&tree) - 1);
        assert_eq!(locate(&next, "shoes"), None);
        assert_eq!(locate(&next, "clothing"), Some(vec![1, 1]));
    }

    #[test]
    fn remove_missing_id_fails() {
        assert_eq!(remove_item(&sample_tree(), "missing"), Err(TreeError::NotFound));
    }

    #[test]
    fn move_splices_out_then_inserts_at_the_targets_new_index() {
        // [A, B, C]: splicing A out leaves [B, C], C is then at index 1,
        // so A lands between B and C rather than at the end.
        let tree = vec![item("a", "A"), item("b", "B"), item("c", "C")];
        let MovePlan::Apply(next) = plan_move(&tree, "a", Some("c")).unwrap() else {
            panic!("expected a move");
        };
        let order: Vec<&str> = next.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, ["b", "a", "c"]);
    }

    #[test]
    fn move_onto_an_earlier_sibling_takes_its_slot() {
        let tree = vec![item("a", "A"), item("b", "B"), item("c", "C")];
        let MovePlan::Apply(next) = plan_move(&tree, "c", Some("a")).unwrap() else {
            panic!("expected a move");
        };
        let order: Vec<&str> = next.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, ["c", "a", "b"]);
    }

    #[test]
    fn move_across_parents_reuses_the_same_splice_logic() {
        let tree = vec![
            branch("p1", "One", vec![item("c1", "C1"), item("c2", "C2")]),
            branch("p2", "Two", vec![item("c3", "C3")]),
        ];
        let MovePlan::Apply(next) = plan_move(&tree, "c1", Some("c3")).unwrap() else {
            panic!("expected a move");
        };

        let first: Vec<&str> = next[0].children.iter().map(|i| i.id.as_str()).collect();
        let second: Vec<&str> = next[1].children.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(first, ["c2"]);
        assert_eq!(second, ["c1", "c3"]);
    }

    #[test]
    fn move_changes_positions_and_nothing_else() {
        let tree = sample_tree();
        let MovePlan::Apply(next) = plan_move(&tree, "about", Some("sale")).unwrap() else {
            panic!("expected a move");
        };

        assert_eq!(count_items(&next), count_items(&tree));

        let mut before = collect_ids(&tree);
        let mut after = collect_ids(&next);
        before.sort();
        after.sort();
        assert_eq!(before, after);

        for id in collect_ids(&tree) {
            let was = item_at(&tree, &locate(&tree, &id).unwrap()).unwrap();
            let now = item_at(&next, &locate(&next, &id).unwrap()).unwrap();
            assert_eq!(was.label, now.label);
            assert_eq!(was.url, now.url);
        }
    }

    #[test]
    fn move_with_no_target_is_skipped() {
        assert_eq!(plan_move(&sample_tree(), "about", None), Ok(MovePlan::NoOp));
    }

    #[test]
    fn move_onto_itself_is_skipped() {
        assert_eq!(
            plan_move(&sample_tree(), "about", Some("about")),
            Ok(MovePlan::NoOp)
        );
    }

    #[test]
    fn move_with_a_missing_endpoint_fails() {
        let tree = sample_tree();
        assert_eq!(plan_move(&tree, "missing", Some("about")), Err(TreeError::NotFound));
        assert_eq!(plan_move(&tree, "about", Some("missing")), Err(TreeError::NotFound));
    }

    #[test]
    fn move_into_the_items_own_subtree_is_rejected() {
        let tree = sample_tree();
        assert_eq!(plan_move(&tree, "shop", Some("sale")), Err(TreeError::InvalidMove));
        assert_eq!(plan_move(&tree, "shop", Some("shoes")), Err(TreeError::InvalidMove));
    }

    #[test]
    fn counters_walk_the_whole_tree() {
        let tree = sample_tree();
        assert_eq!(count_items(&tree), 6);
        assert_eq!(count_links(&tree), 2);
        assert_eq!(count_items(&[]), 0);
        assert_eq!(count_links(&[]), 0);
    }
}
