use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::backtrack::reconstruct;
use crate::diagnostics::{lexical_gaps, LexicalGap};
use crate::error::Error;
use crate::grammar::Grammar;
use crate::rules::Symbol;
use crate::syntree::ParseTree;
use crate::tokenizer::tokenize;

/// Triangular CYK table. `cell(i, j)` holds every symbol that derives
/// tokens `i..=j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
  /// row i holds the cells (i, i) ..= (i, n - 1)
  cells: Vec<Vec<BTreeSet<Symbol>>>,
}

impl Chart {
  pub fn new(length: usize) -> Self {
    Self {
      cells: (0..length).map(|i| vec![BTreeSet::new(); length - i]).collect(),
    }
  }

  /// Number of tokens covered
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn cell(&self, i: usize, j: usize) -> &BTreeSet<Symbol> {
    assert!(i <= j && j < self.len(), "no cell {}..{} in chart of {}", i, j, self.len());
    &self.cells[i][j - i]
  }

  pub fn contains(&self, i: usize, j: usize, symbol: Symbol) -> bool {
    self.cell(i, j).contains(&symbol)
  }

  /// The cell spanning the whole input
  pub fn top(&self) -> Option<&BTreeSet<Symbol>> {
    if self.is_empty() {
      None
    } else {
      Some(self.cell(0, self.len() - 1))
    }
  }

  pub fn accepts(&self, symbol: Symbol) -> bool {
    self.top().is_some_and(|cell| cell.contains(&symbol))
  }

  /// All (i, j) pairs, shortest spans first
  pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
    let n = self.len();
    (1..=n).flat_map(move |length| (0..=n - length).map(move |i| (i, i + length - 1)))
  }

  /// Cells only ever grow
  fn add(&mut self, i: usize, j: usize, symbol: Symbol) -> bool {
    self.cells[i][j - i].insert(symbol)
  }

  /// Runs both CYK phases over `tokens`. Tokens with no terminal rule are
  /// returned as gaps; their diagonal cell stays empty.
  pub fn fill(tokens: &[String], grammar: &Grammar) -> (Self, Vec<LexicalGap>) {
    let n = tokens.len();
    let mut chart = Self::new(n);
    let gaps = lexical_gaps(tokens, grammar);
    for gap in &gaps {
      warn!(token = %gap.token, position = gap.position, "{}", gap);
    }

    for (i, token) in tokens.iter().enumerate() {
      for a in grammar.parents_of_word(token) {
        chart.add(i, i, *a);
      }
    }

    for length in 2..=n {
      trace!(length, "filling spans");
      for i in 0..=n - length {
        let j = i + length - 1;
        for k in i..j {
          // (i, k) and (k + 1, j) never alias (i, j)
          let mut found = Vec::new();
          for b in chart.cell(i, k) {
            for c in chart.cell(k + 1, j) {
              found.extend_from_slice(grammar.parents_of_pair(*b, *c));
            }
          }
          for a in found {
            chart.add(i, j, a);
          }
        }
      }
    }

    (chart, gaps)
  }
}

impl fmt::Display for Chart {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let n = self.len();
    for length in (1..=n).rev() {
      writeln!(f, "Span {}:", length)?;
      for i in 0..=n - length {
        let j = i + length - 1;
        write!(f, "  {}..{}:", i, j)?;
        let cell = self.cell(i, j);
        if cell.is_empty() {
          write!(f, " -")?;
        }
        for sym in cell {
          write!(f, " {}", sym)?;
        }
        writeln!(f)?;
      }
    }
    Ok(())
  }
}

/// Result of running the tokenizer and chart builder over one sentence
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
  pub accepted: bool,
  pub chart: Chart,
  pub tokens: Vec<String>,
  pub gaps: Vec<LexicalGap>,
}

impl Parse {
  /// Rebuilds one derivation, or None if the sentence was rejected
  pub fn tree(&self, grammar: &Grammar) -> Result<Option<ParseTree>, Error> {
    if !self.accepted {
      return Ok(None);
    }
    reconstruct(grammar, &self.chart, &self.tokens)
  }
}

pub fn parse(sentence: &str, grammar: &Grammar) -> Parse {
  parse_tokens(tokenize(sentence, grammar), grammar)
}

/// Like [`parse`], but refuses to fill a chart for more than `max_tokens`
/// tokens. Chart cost is cubic in the token count.
pub fn parse_bounded(sentence: &str, grammar: &Grammar, max_tokens: usize) -> Result<Parse, Error> {
  let tokens = tokenize(sentence, grammar);
  if tokens.len() > max_tokens {
    return Err(Error::TooManyTokens {
      count: tokens.len(),
      limit: max_tokens,
    });
  }
  Ok(parse_tokens(tokens, grammar))
}

fn parse_tokens(tokens: Vec<String>, grammar: &Grammar) -> Parse {
  let (chart, gaps) = Chart::fill(&tokens, grammar);
  let accepted = chart.accepts(grammar.start());
  debug!(tokens = tokens.len(), accepted, "parsed");
  Parse {
    accepted,
    chart,
    tokens,
    gaps,
  }
}

impl Grammar {
  pub fn parse(&self, sentence: &str) -> Parse {
    parse(sentence, self)
  }
}
