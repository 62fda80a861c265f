// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Folds a decomposition tree into a single phrase.

use crate::split::{Fragment, Tree};

/// Reduce `tree` to one fragment, post-order.
///
/// Each subtree collapses to a single fragment first; fragments with empty text are dropped
/// and the survivors are left-folded with the language's `merge`. An empty tree yields the
/// empty fragment.
pub fn clean<F>(tree: Tree, merge: &F) -> Fragment
  where F: Fn(Fragment, Fragment) -> Fragment
{
  match tree {
    Tree::Leaf(fragment) => fragment,
    Tree::Node(children) => children
        .into_iter()
        .map(|child| clean(child, merge))
        .filter(|fragment| !fragment.text.is_empty())
        .fold(None, |folded: Option<Fragment>, right| match folded {
          Some(left) => Some(merge(left, right)),
          None => Some(right),
        })
        .unwrap_or_default(),
  }
}
