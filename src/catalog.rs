//! The Balinese grammar: categorized word lists composed into one CNF table
//! for sentences with an adjective-phrase predicate.

use crate::grammar::Grammar;
use crate::rules::{Production, Rule, Symbol};

lazy_static! {
  /// Shared, read-only instance of [`build`]
  pub static ref BALINESE: Grammar = build();
}

pub fn build() -> Grammar {
  Lexicon::default().build()
}

/// Literal word lists per syntactic category, all lower-case
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
  pub adjectives: Vec<String>,
  pub adverbs: Vec<String>,
  pub nouns: Vec<String>,
  pub proper_nouns: Vec<String>,
  /// also the clitic suffixes, see [`Grammar::clitic_suffixes`]
  pub pronouns: Vec<String>,
  pub determiners: Vec<String>,
  pub particles: Vec<String>,
  pub prepositions: Vec<String>,
  pub verbs: Vec<String>,
  pub temporal_nouns: Vec<String>,
  pub temporal_adjectives: Vec<String>,
  pub numerals: Vec<String>,
}

fn words(ws: &[&str]) -> Vec<String> {
  ws.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
  fn default() -> Self {
    Self {
      adjectives: words(&[
        "jegeg", "lanying", "peteng", "dedet", "lantang", "tegeh", "cenik", "kedas", "nyalang",
        "joh", "ening", "seger", "resik", "becik", "sungkan", "wicaksana", "putih", "tenang",
        "aget", "kasub", "gede", "demen", "seleg", "melah", "pait", "gedeg", "tresna", "bakti",
        "dueg", "sayang", "jejeh", "kangen", "makesiab", "jemet", "penting", "seneng", "perlu",
        "gelis", "satinut", "galak", "lek", "demit", "miik", "ngalub", "ririh", "inguh", "rajin",
        "bengkung", "siteng", "nau", "wareg", "sebet", "cerik", "mekelo", "sue",
      ]),
      adverbs: words(&["sajan", "pisan", "gati", "sesai"]),
      nouns: words(&[
        "cunguh", "kamar", "bok", "punyan", "umah", "kaca", "yeh", "tukad", "griya", "kaki",
        "prabu", "rabi", "panyingakan", "dadong", "manah", "galah", "wastan", "lawar", "basa",
        "baju", "ubad", "adi", "timpal", "okan", "guru", "panak", "meme", "buku", "cicing", "anak",
        "kulawarga", "pan", "pikobet", "pitulung", "awig-awig", "desa", "sekolah", "tamiu",
        "parumahan", "yoga", "natah", "bunga", "sandat", "jumah", "piutang", "lontar", "karya",
        "idup", "rerama", "kayu", "peken", "kebaya", "pura", "nasi", "paon", "ati", "petani",
        "buah", "stroberi", "tegal", "agung", "dagang", "canang", "bapa", "tetamian", "keris",
        "kemimitan", "paica", "due", "kampuh", "sutra", "puri", "tukang", "tenun", "kain", "endek",
        "wantilan", "gangsa", "pragina", "kelas", "paplajahan", "seni", "uyah", "sanggah",
        "tanding", "tulis", "jukung", "sisin", "pasih", "mobil", "lapangan", "perbekel", "tiban",
        "umur", "ubuhan", "meong", "meter", "tembok", "jam", "rapat", "ujian", "pemangku", "ukud",
      ]),
      proper_nouns: words(&[
        "widya", "putu", "made", "wayan", "nukarna", "bagya", "yogi", "kevin", "inggris", "desak",
        "gede", "kadek", "sanur",
      ]),
      pronouns: words(&[
        "ida", "titiang", "dane", "ragane", "tiang", "ia", "raga", "ipune", "nyane", "ne", "e",
      ]),
      determiners: words(&["punika", "puniki", "ento", "niki"]),
      particles: words(&["i", "sang"]),
      prepositions: words(&["teken", "ring", "ajak", "uli", "di", "saking", "ka"]),
      verbs: words(&[
        "polih", "ngajeng", "malajah", "maan", "nepukin", "ngigel", "musik", "karaosang",
        "ngempu", "malaib", "masatua", "mamaca", "ngidih", "tulung", "makidihang", "ngebekin",
        "magending", "ngitungang", "nyurat", "ngamargiang", "negen", "nganggon", "nongos",
        "ngalapang", "nyilihang", "ngai", "nyetir", "nyalon", "dadi",
      ]),
      temporal_nouns: words(&[
        "dibi", "ibi", "dugas", "sanja", "semeng", "jani", "tuni", "mani", "tengai",
      ]),
      temporal_adjectives: words(&["cerik"]),
      numerals: words(&[
        "sabilang", "molas", "dasa", "akilo", "telu", "limang", "telung", "dua", "duang",
      ]),
    }
  }
}

/// Accumulates rules in declaration order
struct RuleTable(Vec<Rule>);

impl RuleTable {
  fn binary(&mut self, symbol: Symbol, pairs: &[(Symbol, Symbol)]) -> &mut Self {
    for (b, c) in pairs {
      self.0.push(Rule::new(symbol, Production::Binary(*b, *c)));
    }
    self
  }

  fn terminals<'a>(&mut self, symbol: Symbol, ws: impl IntoIterator<Item = &'a String>) -> &mut Self {
    for w in ws {
      self.0.push(Rule::new(symbol, Production::Terminal(w.clone())));
    }
    self
  }
}

impl Lexicon {
  pub fn build(&self) -> Grammar {
    use Symbol::*;

    // shapes of a noun phrase, shared by subject, complement and NP itself
    const NP_SHAPES: [(Symbol, Symbol); 7] = [
      (NP, Noun),
      (Part, NP),
      (NP, Det),
      (NP, Pronoun),
      (NP, PropNoun),
      (NP, Part),
      (NP, AdjP),
    ];
    const PP_SHAPES: [(Symbol, Symbol); 4] =
      [(Prep, NP), (Prep, Adj_time), (Prep, NP_time), (PP, PP)];
    const ADJP_SHAPES: [(Symbol, Symbol); 2] = [(AdjP, Adv), (AdjP, Adj)];

    let nominals = || {
      self
        .nouns
        .iter()
        .chain(self.proper_nouns.iter())
        .chain(self.pronouns.iter())
    };

    let mut t = RuleTable(Vec::new());

    // K -> P S | P Pel S | P S Pel | P Pel S Ket | P S Pel Ket, binarized
    t.binary(K, &[(P, S), (X1, S), (P, X2), (X3, Ket), (X4, Ket)]);
    t.binary(X1, &[(P, Pel)]);
    t.binary(X2, &[(S, Pel)]);
    t.binary(X3, &[(X1, S)]);
    t.binary(X4, &[(P, X2)]);

    t.binary(P, &ADJP_SHAPES).terminals(P, &self.adjectives);
    t.binary(AdjP, &ADJP_SHAPES).terminals(AdjP, &self.adjectives);
    t.terminals(Adv, &self.adverbs);
    t.terminals(Adj, &self.adjectives);

    t.binary(S, &NP_SHAPES).terminals(S, nominals());

    t.binary(Pel, &NP_SHAPES)
      .binary(Pel, &[(VP, NP), (VP, Verb)])
      .binary(Pel, &PP_SHAPES)
      .terminals(Pel, nominals().chain(self.verbs.iter()));

    t.binary(Ket, &PP_SHAPES)
      .binary(
        Ket,
        &[(NP_time, Noun_time), (NP_time, Det), (NumP, NP_time), (PP, NP_time)],
      )
      .terminals(Ket, &self.temporal_nouns)
      .terminals(Ket, &self.numerals);

    t.binary(NP, &NP_SHAPES).terminals(NP, nominals());
    t.binary(VP, &[(VP, NP), (VP, Verb)]).terminals(VP, &self.verbs);
    t.binary(PP, &PP_SHAPES);
    t.binary(NumP, &[(NumP, NP_time)]).terminals(NumP, &self.numerals);
    t.binary(NP_time, &[(NP_time, Noun_time), (NP_time, Det)])
      .terminals(NP_time, &self.temporal_nouns);

    t.terminals(Noun, &self.nouns);
    t.terminals(Verb, &self.verbs);
    t.terminals(PropNoun, &self.proper_nouns);
    t.terminals(Pronoun, &self.pronouns);
    t.terminals(Det, &self.determiners);
    t.terminals(Part, &self.particles);
    t.terminals(Prep, &self.prepositions);
    t.terminals(Num, &self.numerals);
    t.terminals(Noun_time, &self.temporal_nouns);
    t.terminals(Adj_time, &self.temporal_adjectives);

    Grammar::new(K, t.0)
  }
}
