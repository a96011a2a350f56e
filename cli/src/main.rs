use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use balicyk::catalog::BALINESE;
use balicyk::diagnostics::audit;
use balicyk::evaluation::evaluate;
use balicyk::{Err, Grammar, parse_bounded};

#[derive(Parser)]
#[command(name = "balicyk")]
#[command(about = "Checks Balinese sentences with a CYK chart parser")]
struct Args {
  /// CNF grammar file to use instead of the built-in Balinese grammar
  file: Option<PathBuf>,

  /// Print the parse chart
  #[arg(short, long)]
  chart: bool,

  /// Don't print the derivation tree of accepted sentences
  #[arg(short, long)]
  no_tree: bool,

  /// Refuse sentences with more tokens than this
  #[arg(short, long, default_value_t = 64)]
  max_tokens: usize,

  /// Report unproductive, unreachable and duplicate rules, then exit
  #[arg(long)]
  audit: bool,

  /// Score the grammar on two files of one sentence per line, the first
  /// grammatical and the second ungrammatical
  #[arg(short, long, num_args = 2, value_names = ["POSITIVE", "NEGATIVE"])]
  eval: Option<Vec<PathBuf>>,
}

fn read_sentences(path: &Path) -> Result<Vec<String>, Err> {
  let src = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
  Ok(
    src
      .lines()
      .map(str::trim)
      .filter(|l| !l.is_empty())
      .map(String::from)
      .collect(),
  )
}

fn parse(g: &Grammar, sentence: &str, args: &Args) -> Result<(), Err> {
  let parse = parse_bounded(sentence, g, args.max_tokens)?;

  println!("tokens: {}", parse.tokens.join(" "));
  if args.chart {
    println!("chart:\n{}", parse.chart);
  }

  if parse.accepted {
    println!("valid");
    if !args.no_tree {
      if let Some(tree) = parse.tree(g)? {
        println!("{}", tree);
      }
    }
  } else {
    println!("invalid");
    for gap in parse.gaps.iter() {
      println!("  {}", gap);
    }
  }
  println!();

  Ok(())
}

fn main() -> Result<(), Err> {
  let args = Args::parse();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let loaded;
  let g: &Grammar = match &args.file {
    Some(path) => {
      loaded = Grammar::read_from_file(path)?;
      &loaded
    }
    None => &*BALINESE,
  };
  info!(start = %g.start(), rules = g.rule_count(), "grammar loaded");

  if args.audit {
    let issues = audit(g);
    if issues.is_empty() {
      println!("no issues");
    }
    for issue in issues {
      println!("{}", issue);
    }
    return Ok(());
  }

  if let Some(files) = &args.eval {
    let positives = read_sentences(&files[0])?;
    let negatives = read_sentences(&files[1])?;
    println!("{}", evaluate(g, positives, negatives));
    return Ok(());
  }

  let mut input = String::new();
  loop {
    print!("> ");
    io::stdout().flush()?;

    input.clear();
    if io::stdin().read_line(&mut input)? == 0 {
      // ctrl+d
      return Ok(());
    }
    if input.trim().is_empty() {
      continue;
    }
    if let Err(e) = parse(g, input.trim(), &args) {
      eprintln!("error: {}", e);
    }
  }
}
