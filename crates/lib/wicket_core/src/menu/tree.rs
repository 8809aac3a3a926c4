//! Single-pass assembly of the annotated menu forest.

use std::collections::HashMap;

use super::MenuError;
use crate::models::menu::{MenuNode, MenuPermissionRow, Permission};

/// Assemble pre-ordered menu rows into a nested forest.
///
/// Rows must arrive parents-first (the queries order by `(level, sort,
/// id)`). Each row is linked at the moment it is seen: a root (`header ==
/// 0`) joins the forest, anything else attaches under its parent *if that
/// parent has already been seen*. A child whose parent has not been seen
/// yet is dropped, not an error — ordering violations upstream degrade the
/// tree instead of failing the request.
///
/// Sibling order inside `child` equals arrival order, so the output is
/// deterministic for a deterministic query.
///
/// Returns [`MenuError::NoAccess`] when the row set is empty: the role has
/// nothing to show.
pub fn build_menu_tree(rows: Vec<MenuPermissionRow>) -> Result<Vec<MenuNode>, MenuError> {
    if rows.is_empty() {
        return Err(MenuError::NoAccess);
    }

    let mut nodes: HashMap<i64, MenuNode> = HashMap::with_capacity(rows.len());
    let mut children_of: HashMap<i64, Vec<i64>> = HashMap::new();
    let mut roots: Vec<i64> = Vec::new();

    for row in rows {
        let node = MenuNode {
            id: row.id,
            name: row.name,
            path: row.path,
            icon: row.icon,
            level: row.level,
            permission: Permission {
                m_created: row.m_created,
                m_view: row.m_view,
                m_updated: row.m_updated,
                m_deleted: row.m_deleted,
            },
            child: Vec::new(),
        };

        if row.header == 0 {
            roots.push(node.id);
        } else if nodes.contains_key(&row.header) {
            children_of.entry(row.header).or_default().push(node.id);
        }
        // else: parent not seen yet -> row is dropped from the tree

        nodes.insert(node.id, node);
    }

    let forest = roots
        .into_iter()
        .filter_map(|id| take_subtree(id, &mut nodes, &children_of))
        .collect();
    Ok(forest)
}

/// Move a node out of the working map, recursively attaching its recorded
/// children.
fn take_subtree(
    id: i64,
    nodes: &mut HashMap<i64, MenuNode>,
    children_of: &HashMap<i64, Vec<i64>>,
) -> Option<MenuNode> {
    let mut node = nodes.remove(&id)?;
    if let Some(child_ids) = children_of.get(&id) {
        for &child_id in child_ids {
            if let Some(child) = take_subtree(child_id, nodes, children_of) {
                node.child.push(child);
            }
        }
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, header: i64, level: i16) -> MenuPermissionRow {
        MenuPermissionRow {
            id,
            name: format!("Menu {id}"),
            path: format!("/menu/{id}"),
            icon: String::new(),
            level,
            header,
            m_created: 1,
            m_view: 1,
            m_updated: 0,
            m_deleted: 0,
        }
    }

    #[test]
    fn child_nests_under_parent() {
        let forest = build_menu_tree(vec![row(1, 0, 1), row(2, 1, 2)]).expect("tree");
        assert_eq!(1, forest.len());
        assert_eq!(1, forest[0].id);
        assert_eq!(1, forest[0].child.len());
        assert_eq!(2, forest[0].child[0].id);
    }

    #[test]
    fn sibling_order_follows_arrival_order() {
        let forest =
            build_menu_tree(vec![row(1, 0, 1), row(3, 1, 2), row(2, 1, 2)]).expect("tree");
        let ids: Vec<i64> = forest[0].child.iter().map(|n| n.id).collect();
        assert_eq!(vec![3, 2], ids);
    }

    #[test]
    fn grandchildren_nest_two_levels_deep() {
        let forest =
            build_menu_tree(vec![row(1, 0, 1), row(2, 1, 2), row(3, 2, 3)]).expect("tree");
        assert_eq!(3, forest[0].child[0].child[0].id);
    }

    #[test]
    fn child_before_parent_is_dropped() {
        // Row 2 references parent 1 before it has been seen.
        let forest = build_menu_tree(vec![row(2, 1, 2), row(1, 0, 1)]).expect("tree");
        assert_eq!(1, forest.len());
        assert_eq!(1, forest[0].id);
        assert!(forest[0].child.is_empty());
    }

    #[test]
    fn empty_rows_are_forbidden() {
        assert!(matches!(
            build_menu_tree(Vec::new()),
            Err(MenuError::NoAccess)
        ));
    }

    #[test]
    fn permission_flags_carry_through() {
        let forest = build_menu_tree(vec![row(1, 0, 1)]).expect("tree");
        let perm = &forest[0].permission;
        assert_eq!((1, 1, 0, 0), (perm.m_created, perm.m_view, perm.m_updated, perm.m_deleted));
    }
}
