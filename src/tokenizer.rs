use tracing::debug;

use crate::grammar::Grammar;

/// Lower-cases and splits a sentence on whitespace, then separates clitic
/// pronoun suffixes from words the grammar doesn't know whole.
///
/// A word that is itself a terminal is never split. Otherwise the first
/// suffix in declared order that ends the word (and isn't the whole word)
/// is split off, giving `stem` then `suffix`. This is first match, not
/// longest match.
pub fn tokenize(sentence: &str, grammar: &Grammar) -> Vec<String> {
  let sentence = sentence.to_lowercase();
  let mut tokens = Vec::new();

  for word in sentence.split_whitespace() {
    if grammar.is_known_word(word) {
      tokens.push(word.to_string());
      continue;
    }

    match split_suffix(word, grammar) {
      Some((stem, suffix)) => {
        debug!(word, stem, suffix, "split clitic suffix");
        tokens.push(stem.to_string());
        tokens.push(suffix.to_string());
      }
      None => tokens.push(word.to_string()),
    }
  }

  tokens
}

fn split_suffix<'a>(word: &'a str, grammar: &'a Grammar) -> Option<(&'a str, &'a str)> {
  grammar
    .clitic_suffixes()
    .find(|s| word.len() > s.len() && word.ends_with(s))
    .map(|s| (&word[..word.len() - s.len()], s))
}

impl Grammar {
  pub fn tokenize(&self, sentence: &str) -> Vec<String> {
    tokenize(sentence, self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::BALINESE;

  fn toks(s: &str) -> Vec<String> {
    tokenize(s, &BALINESE)
  }

  #[test]
  fn lowercases_and_splits_whitespace() {
    assert_eq!(toks("Jegeg  sajan\tPutu\n"), vec!["jegeg", "sajan", "putu"]);
  }

  #[test]
  fn empty_input() {
    assert!(toks("").is_empty());
    assert!(toks("   \n ").is_empty());
  }

  #[test]
  fn splits_suffixes() {
    assert_eq!(toks("Cunguhne lantang"), vec!["cunguh", "ne", "lantang"]);
    assert_eq!(toks("jegeg pisan umahne"), vec!["jegeg", "pisan", "umah", "ne"]);
    assert_eq!(toks("bukune"), vec!["buku", "ne"]);
  }

  #[test]
  fn first_suffix_wins() {
    assert_eq!(toks("tiange"), vec!["tiang", "e"]);
    // both "dane" and "ne" end this word; "dane" is declared first
    assert_eq!(toks("widyadane"), vec!["widya", "dane"]);
  }

  #[test]
  fn known_words_are_never_split() {
    // all of these end in a pronoun literal
    assert_eq!(toks("ipune"), vec!["ipune"]);
    assert_eq!(toks("ragane nyane"), vec!["ragane", "nyane"]);
    assert_eq!(toks("dane"), vec!["dane"]);
    assert_eq!(toks("ida"), vec!["ida"]);
  }

  #[test]
  fn unknown_words_pass_through() {
    assert_eq!(toks("blah"), vec!["blah"]);
    assert_eq!(toks("Blah jegeg"), vec!["blah", "jegeg"]);
  }
}
