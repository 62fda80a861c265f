// Copyright (c) 2016, 2020 Brandon Thomas <bt@brand.io>

//! Breaks an integer into a tree of vocabulary words.

use num::Integer;
use tracing::debug;

use crate::error::{NumericsError, Result};
use crate::vocabulary::Vocabulary;

/// A partially built phrase and the magnitude it stands for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
  /// The words so far.
  pub text: String,
  /// The value the words stand for.
  pub magnitude: u64,
}

impl Fragment {
  /// A fragment from its parts.
  pub fn new(text: impl Into<String>, magnitude: u64) -> Self {
    Fragment {
      text: text.into(),
      magnitude,
    }
  }
}

/// The hierarchical breakdown of one integer.
///
/// Built top-down by [`split`], reduced bottom-up by [`crate::merge::clean`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
  /// A single vocabulary word.
  Leaf(Fragment),
  /// An ordered run of subtrees.
  Node(Vec<Tree>),
}

/// Split `value` into `multiplier × word + remainder` recursively, using the largest
/// multiplier word that fits (or, below one hundred, the largest tens word).
///
/// Exact multiplier hits at or above one hundred still get a leading one, so "hundred"
/// standing alone reads "one hundred".
pub fn split(value: u64, vocabulary: &Vocabulary) -> Result<Tree> {
  if let Some(entry) = vocabulary.get(value) {
    let leaf = Tree::Leaf(Fragment::new(entry.word.as_str(), value));
    if entry.multiplier && value >= 100 {
      return Ok(Tree::Node(vec![split(1, vocabulary)?, leaf]));
    }
    return Ok(Tree::Node(vec![leaf]));
  }

  let base = match vocabulary.largest_multiplier_at_most(value) {
    Some(entry) => entry,
    None if value < 100 => match vocabulary.largest_tens_at_most(value) {
      Some(entry) => entry,
      None => return Err(structural(value)),
    },
    None => return Err(structural(value)),
  };

  let (multiplier, remainder) = value.div_rem(&base.value);
  let mut out = vec![
    split(multiplier, vocabulary)?,
    Tree::Leaf(Fragment::new(base.word.as_str(), base.value)),
  ];
  if remainder > 0 {
    out.push(split(remainder, vocabulary)?);
  }
  Ok(Tree::Node(out))
}

fn structural(value: u64) -> NumericsError {
  debug!(value, "vocabulary has no word to split on");
  NumericsError::Structural(value)
}
