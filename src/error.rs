use thiserror::Error;

use crate::rules::Symbol;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// The chart says `symbol` covers the span, but no rule and split point
  /// reproduce it. Only a broken chart or grammar can cause this.
  #[error("chart has {symbol} over {}..{} but no derivation reproduces it", span.0, span.1)]
  ReconstructionInconsistency { symbol: Symbol, span: (usize, usize) },

  #[error("input has {count} tokens, more than the limit of {limit}")]
  TooManyTokens { count: usize, limit: usize },

  #[error("chart covers {chart} tokens but {tokens} tokens were given")]
  ChartMismatch { chart: usize, tokens: usize },
}
