//! CYK chart parsing for a fragment of Balinese: sentences whose predicate is
//! an adjective phrase.
//!
//! ```
//! use balicyk::catalog::BALINESE;
//!
//! let parse = BALINESE.parse("Jegeg pisan umahne");
//! assert_eq!(parse.tokens, ["jegeg", "pisan", "umah", "ne"]);
//! assert!(parse.accepted);
//!
//! let tree = parse.tree(&BALINESE).unwrap().unwrap();
//! assert_eq!(tree.leaves().len(), 4);
//! ```

#[macro_use]
extern crate lazy_static;

pub mod backtrack;
pub mod catalog;
pub mod chart;
pub mod diagnostics;
pub mod error;
pub mod evaluation;
pub mod grammar;
pub mod parse_grammar;
pub mod rules;
pub mod syntree;
pub mod tokenizer;

pub use crate::backtrack::reconstruct;
pub use crate::chart::{parse, parse_bounded, Chart, Parse};
pub use crate::error::Error;
pub use crate::grammar::Grammar;
pub use crate::rules::{Production, Rule, Symbol};
pub use crate::syntree::ParseTree;
pub use crate::tokenizer::tokenize;

/// Boxed static error type
pub type Err = Box<dyn std::error::Error + 'static>;

#[test]
fn test_grammar_shared_across_threads() {
  use crate::catalog::BALINESE;

  let handles = ["jegeg sajan putu", "putu jegeg", "dueg gati i made malajah"]
    .into_iter()
    .map(|s| std::thread::spawn(move || BALINESE.parse(s).accepted))
    .collect::<Vec<_>>();

  let results = handles
    .into_iter()
    .map(|h| h.join().unwrap())
    .collect::<Vec<_>>();
  assert_eq!(results, vec![true, false, true]);
}
