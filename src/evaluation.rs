//! Scores the parser against sentences labelled grammatical or ungrammatical.

use std::fmt;

use crate::grammar::Grammar;

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
  pub sentence: String,
  pub tokens: Vec<String>,
  /// whether the sentence is labelled grammatical
  pub expected: bool,
  pub predicted: bool,
}

impl Outcome {
  pub fn is_correct(&self) -> bool {
    self.expected == self.predicted
  }

  /// TP, FN, TN or FP
  pub fn label(&self) -> &'static str {
    match (self.expected, self.predicted) {
      (true, true) => "TP",
      (true, false) => "FN",
      (false, false) => "TN",
      (false, true) => "FP",
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
  pub outcomes: Vec<Outcome>,
}

impl Evaluation {
  fn count(&self, expected: bool, predicted: bool) -> usize {
    self
      .outcomes
      .iter()
      .filter(|o| o.expected == expected && o.predicted == predicted)
      .count()
  }

  pub fn true_positives(&self) -> usize {
    self.count(true, true)
  }

  pub fn false_negatives(&self) -> usize {
    self.count(true, false)
  }

  pub fn true_negatives(&self) -> usize {
    self.count(false, false)
  }

  pub fn false_positives(&self) -> usize {
    self.count(false, true)
  }

  pub fn total(&self) -> usize {
    self.outcomes.len()
  }

  /// Percentage of correct predictions, 0 with no data
  pub fn accuracy(&self) -> f64 {
    if self.outcomes.is_empty() {
      return 0.0;
    }
    let correct = self.outcomes.iter().filter(|o| o.is_correct()).count();
    correct as f64 / self.total() as f64 * 100.0
  }
}

pub fn evaluate<P, N>(grammar: &Grammar, positives: P, negatives: N) -> Evaluation
where
  P: IntoIterator,
  P::Item: AsRef<str>,
  N: IntoIterator,
  N::Item: AsRef<str>,
{
  let labelled = positives
    .into_iter()
    .map(|s| (s.as_ref().trim().to_string(), true))
    .chain(
      negatives
        .into_iter()
        .map(|s| (s.as_ref().trim().to_string(), false)),
    );

  let outcomes = labelled
    .map(|(sentence, expected)| {
      let parse = grammar.parse(&sentence);
      Outcome {
        tokens: parse.tokens,
        predicted: parse.accepted,
        sentence,
        expected,
      }
    })
    .collect();

  Evaluation { outcomes }
}

impl fmt::Display for Evaluation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{:<4} | {:<45} | {:<8} | {:<8} | {}", "no", "tokens", "expected", "predicted", "result")?;
    for (idx, o) in self.outcomes.iter().enumerate() {
      writeln!(
        f,
        "{:<4} | {:<45} | {:<8} | {:<8} | {}",
        idx + 1,
        o.tokens.join(" "),
        if o.expected { "valid" } else { "invalid" },
        if o.predicted { "valid" } else { "invalid" },
        o.label(),
      )?;
    }
    writeln!(f)?;
    writeln!(f, "total:           {}", self.total())?;
    writeln!(f, "true positives:  {}", self.true_positives())?;
    writeln!(f, "false negatives: {}", self.false_negatives())?;
    writeln!(f, "true negatives:  {}", self.true_negatives())?;
    writeln!(f, "false positives: {}", self.false_positives())?;
    write!(f, "accuracy:        {:.2}%", self.accuracy())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::BALINESE;

  #[test]
  fn counts_confusion_matrix() {
    let eval = evaluate(
      &BALINESE,
      ["jegeg sajan putu", "  Jegeg pisan umahne\n", "putu jegeg"],
      vec!["sebet pisan ia dibi".to_string(), "jegeg tiang".to_string()],
    );

    assert_eq!(eval.total(), 5);
    assert_eq!(eval.true_positives(), 2);
    assert_eq!(eval.false_negatives(), 1);
    assert_eq!(eval.true_negatives(), 1);
    assert_eq!(eval.false_positives(), 1);
    assert!((eval.accuracy() - 60.0).abs() < 1e-9);

    assert_eq!(eval.outcomes[1].sentence, "Jegeg pisan umahne");
    assert_eq!(eval.outcomes[1].tokens, vec!["jegeg", "pisan", "umah", "ne"]);
    assert_eq!(eval.outcomes[4].label(), "FP");
  }

  #[test]
  fn empty_evaluation() {
    let eval = evaluate(&BALINESE, Vec::<String>::new(), Vec::<String>::new());
    assert_eq!(eval.total(), 0);
    assert_eq!(eval.accuracy(), 0.0);
    assert!(eval.to_string().ends_with("accuracy:        0.00%"));
  }

  #[test]
  fn report_lists_rows() {
    let eval = evaluate(&BALINESE, ["jegeg sajan putu"], ["putu jegeg"]);
    let report = eval.to_string();
    assert!(report.contains("jegeg sajan putu"));
    assert!(report.contains("| TP\n"));
    assert!(report.contains("| TN\n"));
    assert!(report.ends_with("accuracy:        100.00%"));
  }
}
