//! Combinator grammar over token streams.
//!
//! A [`Rule`] is a tree of token [`Predicate`]s combined by sequence,
//! alternative, optional and repeat nodes. Capture nodes record which tokens
//! (or which constant) fill a named slot. One recursive matcher interprets
//! the tree with explicit backtracking: every node yields the full list of
//! ways it can match, in declaration order.
//!
//! # Selection
//!
//! [`Rule::match_prefix`] keeps the longest parse starting at the first
//! token; among equally long parses the one found first (the earliest
//! declared alternative) wins. Trailing tokens are ignored.
//! [`Rule::match_exact`] only accepts parses that consume every token.

use std::fmt;

use crate::morph::{Grammeme, fold};
use crate::token::{Token, TokenKind};

/// A test on a single token.
#[derive(Clone)]
pub enum Predicate {
    /// Token is of the given kind.
    Kind(TokenKind),
    /// Raw text equals the string exactly.
    Eq(&'static str),
    /// Raw text equals the string, ignoring case.
    Caseless(&'static str),
    /// Raw text equals one of the strings, ignoring case.
    InCaseless(&'static [&'static str]),
    /// The lower-cased text or any reading's lemma equals the string.
    Normalized(&'static str),
    /// The lower-cased text or any reading's lemma is in the list.
    Dictionary(&'static [&'static str]),
    /// Some reading carries the grammeme.
    Gram(Grammeme),
    /// Integer token whose value lies in the inclusive range.
    IntRange(u64, u64),
    /// Every predicate holds.
    And(Vec<Predicate>),
    /// At least one predicate holds.
    Or(Vec<Predicate>),
    /// The predicate does not hold.
    Not(Box<Predicate>),
    /// Arbitrary test.
    Fn(fn(&Token) -> bool),
}

impl Predicate {
    /// Evaluates the predicate against `token`.
    #[must_use]
    pub fn test(&self, token: &Token) -> bool {
        match self {
            Self::Kind(kind) => token.kind == *kind,
            Self::Eq(text) => token.text == *text,
            Self::Caseless(text) => fold(&token.text) == fold(text),
            Self::InCaseless(texts) => {
                let folded = fold(&token.text);
                texts.iter().any(|t| fold(t) == folded)
            }
            Self::Normalized(lemma) => {
                fold(&token.text) == *lemma || token.has_lemma(lemma)
            }
            Self::Dictionary(lemmas) => {
                let folded = fold(&token.text);
                lemmas
                    .iter()
                    .any(|lemma| folded == *lemma || token.has_lemma(lemma))
            }
            Self::Gram(grammeme) => token.has_grammeme(*grammeme),
            Self::IntRange(min, max) => token.value().is_some_and(|v| (*min..=*max).contains(&v)),
            Self::And(all) => all.iter().all(|p| p.test(token)),
            Self::Or(any) => any.iter().any(|p| p.test(token)),
            Self::Not(inner) => !inner.test(token),
            Self::Fn(f) => f(token),
        }
    }

    /// Conjunction of `self` and `other`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut all) => {
                all.push(other);
                Self::And(all)
            }
            first => Self::And(vec![first, other]),
        }
    }

    /// Disjunction of `self` and `other`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Or(mut any) => {
                any.push(other);
                Self::Or(any)
            }
            first => Self::Or(vec![first, other]),
        }
    }

    /// Negation of `self`.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Lifts the predicate into a single-token rule.
    #[must_use]
    pub fn rule<S>(self) -> Rule<S> {
        Rule::Token(self)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "kind({kind:?})"),
            Self::Eq(text) => write!(f, "eq({text:?})"),
            Self::Caseless(text) => write!(f, "caseless({text:?})"),
            Self::InCaseless(texts) => write!(f, "in_caseless({texts:?})"),
            Self::Normalized(lemma) => write!(f, "normalized({lemma:?})"),
            Self::Dictionary(lemmas) => write!(f, "dictionary({lemmas:?})"),
            Self::Gram(grammeme) => write!(f, "gram({})", grammeme.code()),
            Self::IntRange(min, max) => write!(f, "int({min}..={max})"),
            Self::And(all) => f.debug_tuple("and").field(all).finish(),
            Self::Or(any) => f.debug_tuple("or").field(any).finish(),
            Self::Not(inner) => f.debug_tuple("not").field(inner).finish(),
            Self::Fn(_) => f.write_str("fn(..)"),
        }
    }
}

/// A grammar rule over tokens, capturing into slots of type `S`.
#[derive(Clone, Debug)]
pub enum Rule<S> {
    /// One token satisfying the predicate.
    Token(Predicate),
    /// Every rule in order.
    Seq(Vec<Rule<S>>),
    /// Any one of the rules, tried in order.
    Alt(Vec<Rule<S>>),
    /// The rule or nothing.
    Optional(Box<Rule<S>>),
    /// The rule repeated between `min` and `max` times.
    Repeat {
        /// The repeated rule.
        rule: Box<Rule<S>>,
        /// Minimum repetitions.
        min: usize,
        /// Maximum repetitions; unbounded when `None`.
        max: Option<usize>,
    },
    /// Records the tokens matched by the rule in a slot.
    Capture(S, Box<Rule<S>>),
    /// Records a constant in a slot when the rule matches.
    Const(S, &'static str, Box<Rule<S>>),
}

/// Sequence of rules.
#[must_use]
pub fn seq<S>(rules: impl IntoIterator<Item = Rule<S>>) -> Rule<S> {
    Rule::Seq(rules.into_iter().collect())
}

/// Alternative of rules.
#[must_use]
pub fn alt<S>(rules: impl IntoIterator<Item = Rule<S>>) -> Rule<S> {
    Rule::Alt(rules.into_iter().collect())
}

impl<S> Rule<S> {
    /// Makes the rule optional.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Repeats the rule between `min` and `max` times.
    #[must_use]
    pub fn repeat(self, min: usize, max: Option<usize>) -> Self {
        Self::Repeat {
            rule: Box::new(self),
            min,
            max,
        }
    }

    /// Captures the matched tokens into `slot`.
    #[must_use]
    pub fn capture(self, slot: S) -> Self {
        Self::Capture(slot, Box::new(self))
    }

    /// Stores `value` in `slot` when the rule matches.
    #[must_use]
    pub fn constant(self, slot: S, value: &'static str) -> Self {
        Self::Const(slot, value, Box::new(self))
    }
}

/// A filled slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture<S> {
    /// The slot.
    pub slot: S,
    /// Index of the first captured token.
    pub start: usize,
    /// Index past the last captured token.
    pub end: usize,
    /// Constant stored instead of the token text.
    pub value: Option<&'static str>,
}

impl<S> Capture<S> {
    /// The captured tokens.
    #[must_use]
    pub fn tokens<'t>(&self, tokens: &'t [Token]) -> &'t [Token] {
        &tokens[self.start..self.end]
    }
}

/// A successful match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<S> {
    /// Number of tokens consumed from the start.
    pub len: usize,
    /// Captures, innermost first.
    pub captures: Vec<Capture<S>>,
}

impl<S: Copy + PartialEq> Match<S> {
    /// The first capture of `slot`.
    #[must_use]
    pub fn get(&self, slot: S) -> Option<&Capture<S>> {
        self.captures.iter().find(|c| c.slot == slot)
    }

    /// Returns true if `slot` was captured.
    #[must_use]
    pub fn has(&self, slot: S) -> bool {
        self.get(slot).is_some()
    }
}

#[derive(Clone, Debug)]
struct State<S> {
    pos: usize,
    captures: Vec<Capture<S>>,
}

impl<S: Copy> Rule<S> {
    /// Longest match from the first token; earliest alternative on ties.
    #[must_use]
    pub fn match_prefix(&self, tokens: &[Token]) -> Option<Match<S>> {
        let mut best: Option<State<S>> = None;
        for state in self.parses(tokens) {
            if best.as_ref().is_none_or(|b| state.pos > b.pos) {
                best = Some(state);
            }
        }
        best.map(State::into_match)
    }

    /// First match that consumes every token.
    #[must_use]
    pub fn match_exact(&self, tokens: &[Token]) -> Option<Match<S>> {
        self.parses(tokens)
            .into_iter()
            .find(|s| s.pos == tokens.len())
            .map(State::into_match)
    }

    fn parses(&self, tokens: &[Token]) -> Vec<State<S>> {
        let mut out = Vec::new();
        self.step(
            tokens,
            State {
                pos: 0,
                captures: Vec::new(),
            },
            &mut out,
        );
        out
    }

    fn step(&self, tokens: &[Token], state: State<S>, out: &mut Vec<State<S>>) {
        match self {
            Self::Token(predicate) => {
                if tokens.get(state.pos).is_some_and(|t| predicate.test(t)) {
                    out.push(State {
                        pos: state.pos + 1,
                        captures: state.captures,
                    });
                }
            }
            Self::Seq(rules) => {
                let mut states = vec![state];
                for rule in rules {
                    let mut next = Vec::new();
                    for s in states {
                        rule.step(tokens, s, &mut next);
                    }
                    if next.is_empty() {
                        return;
                    }
                    states = next;
                }
                out.extend(states);
            }
            Self::Alt(rules) => {
                for rule in rules {
                    rule.step(tokens, state.clone(), out);
                }
            }
            Self::Optional(rule) => {
                rule.step(tokens, state.clone(), out);
                out.push(state);
            }
            Self::Repeat { rule, min, max } => {
                repeat(rule, *min, *max, tokens, state, 0, out);
            }
            Self::Capture(slot, rule) => {
                let start = state.pos;
                let mut inner = Vec::new();
                rule.step(tokens, state, &mut inner);
                for mut s in inner {
                    s.captures.push(Capture {
                        slot: *slot,
                        start,
                        end: s.pos,
                        value: None,
                    });
                    out.push(s);
                }
            }
            Self::Const(slot, value, rule) => {
                let start = state.pos;
                let mut inner = Vec::new();
                rule.step(tokens, state, &mut inner);
                for mut s in inner {
                    s.captures.push(Capture {
                        slot: *slot,
                        start,
                        end: s.pos,
                        value: Some(*value),
                    });
                    out.push(s);
                }
            }
        }
    }
}

/// Greedy repetition: longer runs are listed before shorter ones.
fn repeat<S: Copy>(
    rule: &Rule<S>,
    min: usize,
    max: Option<usize>,
    tokens: &[Token],
    state: State<S>,
    count: usize,
    out: &mut Vec<State<S>>,
) {
    if max.is_none_or(|m| count < m) {
        let mut next = Vec::new();
        rule.step(tokens, state.clone(), &mut next);
        for s in next {
            // An empty iteration would loop forever.
            if s.pos > state.pos {
                repeat(rule, min, max, tokens, s, count + 1, out);
            }
        }
    }
    if count >= min {
        out.push(state);
    }
}

impl<S> State<S> {
    fn into_match(self) -> Match<S> {
        Match {
            len: self.pos,
            captures: self.captures,
        }
    }
}
