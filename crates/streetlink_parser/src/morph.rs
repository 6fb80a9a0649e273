//! Morphological tagging.
//!
//! Grammar predicates ask two questions about a word: which lemmas it can be
//! a form of, and which grammemes (part of speech, name class, gender,
//! number, case) those readings carry. A [`Tagger`] answers both with a list
//! of [`Parse`]s. The default [`DictionaryTagger`] looks words up in a small
//! static lexicon and falls back to a suffix guesser for Cyrillic words.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::lexicon::{self, LexEntry};

/// A single grammatical feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Grammeme {
    /// Noun.
    Noun,
    /// Full-form adjective.
    Adjective,
    /// Numeral or ordinal compound (`50-летия`).
    Numeral,
    /// Preposition.
    Preposition,
    /// Conjunction.
    Conjunction,
    /// Any other known part of speech.
    Other,
    /// The tagger has no idea.
    Unknown,
    /// First name.
    FirstName,
    /// Surname.
    Surname,
    /// Patronymic.
    Patronymic,
    /// Abbreviation.
    Abbreviation,
    /// Geographical name.
    Geographic,
    /// Masculine gender.
    Masculine,
    /// Feminine gender.
    Feminine,
    /// Neuter gender.
    Neuter,
    /// Singular.
    Singular,
    /// Plural.
    Plural,
    /// Nominative case.
    Nominative,
    /// Genitive case.
    Genitive,
    /// Dative case.
    Dative,
    /// Accusative case.
    Accusative,
    /// Instrumental case.
    Instrumental,
    /// Prepositional case.
    Prepositional,
}

impl Grammeme {
    /// Every grammeme in bit order.
    pub const ALL: [Self; 23] = [
        Self::Noun,
        Self::Adjective,
        Self::Numeral,
        Self::Preposition,
        Self::Conjunction,
        Self::Other,
        Self::Unknown,
        Self::FirstName,
        Self::Surname,
        Self::Patronymic,
        Self::Abbreviation,
        Self::Geographic,
        Self::Masculine,
        Self::Feminine,
        Self::Neuter,
        Self::Singular,
        Self::Plural,
        Self::Nominative,
        Self::Genitive,
        Self::Dative,
        Self::Accusative,
        Self::Instrumental,
        Self::Prepositional,
    ];

    const fn bit(self) -> u32 {
        1 << (self as u32)
    }

    /// OpenCorpora-style short code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Adjective => "ADJF",
            Self::Numeral => "NUMR",
            Self::Preposition => "PREP",
            Self::Conjunction => "CONJ",
            Self::Other => "OTHR",
            Self::Unknown => "UNKN",
            Self::FirstName => "Name",
            Self::Surname => "Surn",
            Self::Patronymic => "Patr",
            Self::Abbreviation => "Abbr",
            Self::Geographic => "Geox",
            Self::Masculine => "masc",
            Self::Feminine => "femn",
            Self::Neuter => "neut",
            Self::Singular => "sing",
            Self::Plural => "plur",
            Self::Nominative => "nomn",
            Self::Genitive => "gent",
            Self::Dative => "datv",
            Self::Accusative => "accs",
            Self::Instrumental => "ablt",
            Self::Prepositional => "loct",
        }
    }

    const fn is_part_of_speech(self) -> bool {
        (self as u8) <= (Self::Unknown as u8)
    }
}

/// A compact set of grammemes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u32);

impl TagSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from a slice of grammemes.
    #[must_use]
    pub const fn of(grammemes: &[Grammeme]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < grammemes.len() {
            bits |= grammemes[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Returns true if the set holds `grammeme`.
    #[must_use]
    pub const fn contains(self, grammeme: Grammeme) -> bool {
        self.0 & grammeme.bit() != 0
    }

    /// Returns the set with `grammeme` added.
    #[must_use]
    pub const fn with(self, grammeme: Grammeme) -> Self {
        Self(self.0 | grammeme.bit())
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if no grammeme is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the part of speech, if the set holds one.
    #[must_use]
    pub fn part_of_speech(self) -> Option<Grammeme> {
        self.iter().find(|g| g.is_part_of_speech())
    }

    /// Iterates over the grammemes in bit order.
    pub fn iter(self) -> impl Iterator<Item = Grammeme> {
        Grammeme::ALL.into_iter().filter(move |g| self.contains(*g))
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagSet({self})")
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<_> = self.iter().map(Grammeme::code).collect();
        f.write_str(&codes.join(","))
    }
}

/// One reading of a word: its lemma and grammemes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parse {
    /// Dictionary form, lower case with `ё` folded to `е`.
    pub lemma: String,
    /// Grammemes of this reading.
    pub tags: TagSet,
}

impl Parse {
    /// Creates a new parse.
    #[must_use]
    pub fn new(lemma: impl Into<String>, tags: TagSet) -> Self {
        Self {
            lemma: lemma.into(),
            tags,
        }
    }

    /// A reading the tagger knows nothing about.
    #[must_use]
    pub fn unknown(word: &str) -> Self {
        Self::new(fold(word), TagSet::of(&[Grammeme::Unknown]))
    }
}

/// Source of morphological readings.
///
/// Implementations never fail: a word they cannot analyze gets a single
/// [`Grammeme::Unknown`] reading.
pub trait Tagger: Send + Sync + fmt::Debug {
    /// Returns every reading of `word`, most likely first.
    fn analyze(&self, word: &str) -> Vec<Parse>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn analyze(&self, word: &str) -> Vec<Parse> {
        (**self).analyze(word)
    }
}

/// Lower-cases `word` and folds `ё` to `е`, the form lemmas are stored in.
#[must_use]
pub fn fold(word: &str) -> String {
    word.to_lowercase().replace('ё', "е")
}

/// Lexicon-backed tagger with a suffix guesser for out-of-vocabulary words.
#[derive(Clone, Debug, Default)]
pub struct DictionaryTagger {
    entries: HashMap<String, Vec<Parse>>,
    guess: bool,
}

static STANDARD: LazyLock<DictionaryTagger> =
    LazyLock::new(|| DictionaryTagger::from_entries(lexicon::LEXICON).with_guessing(true));

impl DictionaryTagger {
    /// Creates an empty tagger without guessing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tagger from static lexicon entries.
    #[must_use]
    pub fn from_entries(entries: &[LexEntry]) -> Self {
        let mut tagger = Self::new();
        for entry in entries {
            tagger.insert(entry.form, Parse::new(entry.lemma, entry.tags));
        }
        tagger
    }

    /// The process-wide tagger built from the standard lexicon.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Enables or disables the suffix guesser.
    #[must_use]
    pub fn with_guessing(mut self, guess: bool) -> Self {
        self.guess = guess;
        self
    }

    /// Adds a reading for a word form.
    pub fn insert(&mut self, form: &str, parse: Parse) {
        let readings = self.entries.entry(fold(form)).or_default();
        if !readings.contains(&parse) {
            readings.push(parse);
        }
    }

    /// Number of distinct word forms in the lexicon.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Tagger for DictionaryTagger {
    fn analyze(&self, word: &str) -> Vec<Parse> {
        let folded = fold(word);
        if let Some(readings) = self.entries.get(&folded) {
            return readings.clone();
        }
        if self.guess {
            if let Some(readings) = guess(&folded) {
                return readings;
            }
        }
        vec![Parse::unknown(word)]
    }
}

/// Adjective endings, longest first, with the grammemes they imply.
const ADJECTIVE_ENDINGS: &[(&str, TagSet)] = &[
    ("ого", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Genitive])),
    ("его", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Genitive])),
    ("ому", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Dative])),
    ("ему", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Dative])),
    ("ыми", TagSet::of(&[Grammeme::Plural, Grammeme::Instrumental])),
    ("ими", TagSet::of(&[Grammeme::Plural, Grammeme::Instrumental])),
    ("ый", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Nominative])),
    ("ий", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Nominative])),
    ("ой", TagSet::of(&[Grammeme::Feminine, Grammeme::Singular, Grammeme::Genitive])),
    ("ая", TagSet::of(&[Grammeme::Feminine, Grammeme::Singular, Grammeme::Nominative])),
    ("яя", TagSet::of(&[Grammeme::Feminine, Grammeme::Singular, Grammeme::Nominative])),
    ("ую", TagSet::of(&[Grammeme::Feminine, Grammeme::Singular, Grammeme::Accusative])),
    ("юю", TagSet::of(&[Grammeme::Feminine, Grammeme::Singular, Grammeme::Accusative])),
    ("ое", TagSet::of(&[Grammeme::Neuter, Grammeme::Singular, Grammeme::Nominative])),
    ("ее", TagSet::of(&[Grammeme::Neuter, Grammeme::Singular, Grammeme::Nominative])),
    ("ые", TagSet::of(&[Grammeme::Plural, Grammeme::Nominative])),
    ("ие", TagSet::of(&[Grammeme::Plural, Grammeme::Nominative])),
    ("ых", TagSet::of(&[Grammeme::Plural, Grammeme::Genitive])),
    ("их", TagSet::of(&[Grammeme::Plural, Grammeme::Genitive])),
    ("ым", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Instrumental])),
    ("им", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Instrumental])),
];

/// Surname endings (nominative and genitive of the -ов/-ин type).
const SURNAME_ENDINGS: &[(&str, &str, TagSet)] = &[
    ("ова", "ов", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Genitive])),
    ("ева", "ев", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Genitive])),
    ("ина", "ин", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Genitive])),
    ("ына", "ын", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Genitive])),
    ("ов", "ов", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Nominative])),
    ("ев", "ев", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Nominative])),
    ("ин", "ин", TagSet::of(&[Grammeme::Masculine, Grammeme::Singular, Grammeme::Nominative])),
];

fn is_cyrillic(ch: char) -> bool {
    matches!(ch, 'а'..='я' | 'ё')
}

/// Guesses readings for an out-of-vocabulary folded word.
///
/// Single letters are initials or particles, never nouns. Hyphenated words
/// are guessed from their last part.
fn guess(folded: &str) -> Option<Vec<Parse>> {
    let head = folded.rsplit('-').next().unwrap_or(folded);
    if head.is_empty() || !head.chars().all(is_cyrillic) {
        return None;
    }
    if folded.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Some(vec![Parse::new(folded, TagSet::of(&[Grammeme::Numeral]))]);
    }
    if folded.chars().count() == 1 {
        return Some(vec![Parse::new(folded, TagSet::of(&[Grammeme::Other]))]);
    }

    let prefix = &folded[..folded.len() - head.len()];
    let mut readings = Vec::new();
    let stem_len = head.chars().count();

    if stem_len > 3 {
        if let Some((ending, tags)) = ADJECTIVE_ENDINGS.iter().find(|(e, _)| head.ends_with(e)) {
            let stem = &head[..head.len() - ending.len()];
            let lemma = format!("{prefix}{stem}{}", adjective_lemma_ending(stem, ending));
            readings.push(Parse::new(lemma, tags.with(Grammeme::Adjective)));
        }
    }

    if stem_len > 4 {
        if let Some((ending, base, tags)) = SURNAME_ENDINGS.iter().find(|(e, _, _)| head.ends_with(e)) {
            let stem = &head[..head.len() - ending.len()];
            let lemma = format!("{prefix}{stem}{base}");
            readings.push(Parse::new(
                lemma,
                tags.with(Grammeme::Noun).with(Grammeme::Surname),
            ));
        }
    }

    readings.push(Parse::new(folded, TagSet::of(&[Grammeme::Noun])));
    Some(readings)
}

/// Picks the masculine nominative ending for an adjective stem.
fn adjective_lemma_ending(stem: &str, ending: &str) -> &'static str {
    let soft = ending.starts_with(['я', 'е', 'ю', 'и']);
    let velar = stem.ends_with(['г', 'к', 'х', 'ж', 'ш', 'ч', 'щ']);
    if ending == "ой" && !velar {
        "ой"
    } else if soft || velar {
        "ий"
    } else {
        "ый"
    }
}
