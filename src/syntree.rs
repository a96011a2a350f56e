use std::fmt;

use crate::rules::Symbol;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Constituent {
  pub symbol: Symbol,
  pub span: (usize, usize),
}

impl fmt::Display for Constituent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}..{}: {}", self.span.0, self.span.1, self.symbol)
  }
}

/// A token with its position in the sentence, so renderers can lay out
/// leaves without keeping a counter of their own
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Word {
  pub value: String,
  pub position: usize,
}

impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.value)
  }
}

/// One binary derivation
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseTree {
  Leaf(Constituent, Word),
  Branch(Constituent, Box<ParseTree>, Box<ParseTree>),
}

impl ParseTree {
  pub fn leaf(symbol: Symbol, value: impl Into<String>, position: usize) -> Self {
    Self::Leaf(
      Constituent {
        symbol,
        span: (position, position),
      },
      Word {
        value: value.into(),
        position,
      },
    )
  }

  /// Joins two adjacent subtrees under `symbol`
  pub fn branch(symbol: Symbol, left: ParseTree, right: ParseTree) -> Self {
    let span = (left.span().0, right.span().1);
    Self::Branch(Constituent { symbol, span }, Box::new(left), Box::new(right))
  }

  pub fn constituent(&self) -> &Constituent {
    match self {
      Self::Leaf(c, _) | Self::Branch(c, _, _) => c,
    }
  }

  pub fn symbol(&self) -> Symbol {
    self.constituent().symbol
  }

  pub fn span(&self) -> (usize, usize) {
    self.constituent().span
  }

  pub fn is_leaf(&self) -> bool {
    matches!(self, Self::Leaf(_, _))
  }

  pub fn is_branch(&self) -> bool {
    matches!(self, Self::Branch(_, _, _))
  }

  pub fn get_leaf(&self) -> Option<&Word> {
    match self {
      Self::Leaf(_, w) => Some(w),
      _ => None,
    }
  }

  pub fn get_branch(&self) -> Option<(&ParseTree, &ParseTree)> {
    match self {
      Self::Branch(_, l, r) => Some((&**l, &**r)),
      _ => None,
    }
  }

  /// Leaves from left to right
  pub fn leaves(&self) -> Vec<&Word> {
    match self {
      Self::Leaf(_, w) => vec![w],
      Self::Branch(_, l, r) => {
        let mut ws = l.leaves();
        ws.extend(r.leaves());
        ws
      }
    }
  }

  /// Number of nodes on the longest root-to-leaf path
  pub fn depth(&self) -> usize {
    match self {
      Self::Leaf(_, _) => 1,
      Self::Branch(_, l, r) => 1 + l.depth().max(r.depth()),
    }
  }
}

impl fmt::Display for ParseTree {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Leaf(c, w) => write!(f, "({} {})", c, w),
      Self::Branch(c, l, r) => {
        write!(f, "({}", c)?;
        for t in [l, r] {
          // TODO: is there a nice way to do this that doesn't allocate a String?
          let fmt = format!("{}", t);
          for line in fmt.lines() {
            write!(f, "\n  {}", line)?;
          }
        }
        write!(f, ")")
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rules::Symbol::*;

  fn sample() -> ParseTree {
    ParseTree::branch(
      K,
      ParseTree::branch(P, ParseTree::leaf(AdjP, "jegeg", 0), ParseTree::leaf(Adv, "sajan", 1)),
      ParseTree::leaf(S, "putu", 2),
    )
  }

  #[test]
  fn spans_come_from_children() {
    let t = sample();
    assert_eq!(t.span(), (0, 2));
    assert_eq!(t.symbol(), K);
    let (l, r) = t.get_branch().unwrap();
    assert_eq!(l.span(), (0, 1));
    assert!(r.is_leaf());
    assert_eq!(r.get_leaf().unwrap().position, 2);
  }

  #[test]
  fn leaves_in_order() {
    let t = sample();
    let leaves = t
      .leaves()
      .into_iter()
      .map(|w| (w.position, w.value.as_str()))
      .collect::<Vec<_>>();
    assert_eq!(leaves, vec![(0, "jegeg"), (1, "sajan"), (2, "putu")]);
    assert_eq!(t.depth(), 3);
  }

  #[test]
  fn display_indents_children() {
    assert_eq!(
      sample().to_string(),
      "(0..2: K\n  (0..1: P\n    (0..0: AdjP jegeg)\n    (1..1: Adv sajan))\n  (2..2: S putu))"
    );
  }
}
