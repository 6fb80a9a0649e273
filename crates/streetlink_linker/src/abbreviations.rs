//! Word-level abbreviations of street names.
//!
//! The reference dataset writes "ИМЕНИ" where a user writes "им." or leaves
//! it out entirely. Each entry lists the full word and the spellings it may
//! take; an empty spelling means the word may be dropped.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Full word and its alternative spellings, upper case.
const TABLE: &[(&str, &[&str])] = &[
    ("ИМЕНИ", &["ИМ.", "ИМ", ""]),
    ("КАРЛА", &["К."]),
    ("МАКСИМА", &["М."]),
    ("ПРОТОИЕРЕЯ", &["ПРОТ."]),
    ("КОСМОНАВТА", &["КОСМ.", ""]),
    ("СЕРГЕЯ", &["С."]),
    ("РОЗЫ", &["Р."]),
    ("КОМАНДАРМА", &["КОМ."]),
    ("ГОРОДСКОГО", &["ГОР."]),
    ("ПАРТИЗАНА", &["ПАРТ."]),
    ("НАБЕРЕЖНАЯ", &["НАБ."]),
    ("ГЕНЕРАЛА", &["ГЕН."]),
    ("МАРШАЛА", &["МАРШ."]),
    ("АКАДЕМИКА", &["АКАД."]),
    ("ЛЕЙТЕНАНТА", &["ЛЕЙТ."]),
    ("БОЛЬШОЙ", &["БОЛ."]),
    ("МАЛЫЙ", &["МАЛ."]),
    ("ВЕРХНЯЯ", &["ВЕРХН."]),
    ("НИЖНЯЯ", &["НИЖН."]),
    ("СТАРЫЙ", &["СТ."]),
    ("НОВЫЙ", &["НОВ."]),
    ("50-ЛЕТИЯ", &["50 ЛЕТИЯ", "50-ЛЕТ."]),
];

static STANDARD: LazyLock<Abbreviations> = LazyLock::new(|| Abbreviations::from_table(TABLE));

/// Lookup from a word to its alternative spellings.
#[derive(Clone, Debug, Default)]
pub struct Abbreviations {
    variants: HashMap<String, Vec<String>>,
}

impl Abbreviations {
    /// Builds the lookup from `(full, spellings)` pairs.
    ///
    /// Every non-empty spelling also maps back to the full word and to the
    /// other spellings, so a dataset that stores "ИМ." still gets "ИМЕНИ".
    #[must_use]
    pub fn from_table(table: &[(&str, &[&str])]) -> Self {
        let mut lookup = Self::default();
        for &(full, spellings) in table {
            for &spelling in spellings {
                lookup.add(full, spelling);
                if spelling.is_empty() {
                    continue;
                }
                lookup.add(spelling, full);
                for &other in spellings {
                    if other != spelling {
                        lookup.add(spelling, other);
                    }
                }
            }
        }
        lookup
    }

    /// The process-wide table.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn add(&mut self, word: &str, variant: &str) {
        let list = self.variants.entry(word.to_uppercase()).or_default();
        let variant = variant.to_uppercase();
        if !list.contains(&variant) {
            list.push(variant);
        }
    }

    /// Alternative spellings of `word`, upper case; empty if none.
    #[must_use]
    pub fn variants(&self, word: &str) -> &[String] {
        self.variants
            .get(&word.to_uppercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of words with known variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns true if no word has variants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Every spelling of `name` reachable by replacing one word with one of
    /// its variants. Dropped words leave no extra spaces. The name itself is
    /// not included.
    #[must_use]
    pub fn spellings(&self, name: &str) -> Vec<String> {
        let words: Vec<&str> = name.split_whitespace().collect();
        let mut out = Vec::new();
        for (i, word) in words.iter().enumerate() {
            for variant in self.variants(word) {
                let spelling = words
                    .iter()
                    .enumerate()
                    .map(|(j, w)| if i == j { variant.as_str() } else { *w })
                    .filter(|w| !w.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if !out.contains(&spelling) {
                    out.push(spelling);
                }
            }
        }
        out
    }
}
