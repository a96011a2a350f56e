//! Recovers one derivation from a filled chart.
//!
//! For each symbol the grammar's binary rules are tried in declared order, and
//! for each rule the split points are scanned from the right (k = j - 1 down to
//! i), so the first match is the one with the largest left constituent. The
//! first rule and split whose children both resolve wins; nothing else is
//! explored. Given the same grammar and chart this always yields the same tree.

use crate::chart::Chart;
use crate::error::Error;
use crate::grammar::Grammar;
use crate::rules::Symbol;
use crate::syntree::ParseTree;

/// Returns `Ok(None)` when the chart doesn't accept the grammar's start
/// symbol. Failing to rebuild an accepted chart is an error.
pub fn reconstruct(
  grammar: &Grammar,
  chart: &Chart,
  tokens: &[String],
) -> Result<Option<ParseTree>, Error> {
  if chart.len() != tokens.len() {
    return Err(Error::ChartMismatch {
      chart: chart.len(),
      tokens: tokens.len(),
    });
  }
  if !chart.accepts(grammar.start()) {
    return Ok(None);
  }
  backtrack(grammar, chart, tokens, grammar.start(), 0, tokens.len() - 1).map(Some)
}

fn backtrack(
  grammar: &Grammar,
  chart: &Chart,
  tokens: &[String],
  symbol: Symbol,
  i: usize,
  j: usize,
) -> Result<ParseTree, Error> {
  if i == j {
    return Ok(ParseTree::leaf(symbol, tokens[i].clone(), i));
  }

  let mut err = Error::ReconstructionInconsistency {
    symbol,
    span: (i, j),
  };

  for (b, c) in grammar.binary_rules(symbol) {
    for k in (i..j).rev() {
      if !(chart.contains(i, k, b) && chart.contains(k + 1, j, c)) {
        continue;
      }
      // children of a confirmed split always resolve in a well-formed chart
      let children = backtrack(grammar, chart, tokens, b, i, k)
        .and_then(|left| Ok((left, backtrack(grammar, chart, tokens, c, k + 1, j)?)));
      match children {
        Ok((left, right)) => return Ok(ParseTree::branch(symbol, left, right)),
        Err(e) => err = e,
      }
    }
  }

  Err(err)
}
