//! Text normalization shared by the parser and the linker.

/// Case convention used by the reference dataset.
///
/// Queries are folded to this convention before they are compared with
/// dataset values, so a dataset exported in upper case is matched by
/// `Upper`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CasePolicy {
    /// `МЕТАЛЛУРГОВ`
    #[default]
    Upper,
    /// `металлургов`
    Lower,
    /// `Металлургов`
    Title,
}

impl CasePolicy {
    /// Folds `text` to this case convention.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
            Self::Title => title_case(text),
        }
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest: `"50-летия октября"` becomes `"50-Летия Октября"`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Trims `text` and replaces every run of whitespace with one space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns true if `text` is empty or whitespace only.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
