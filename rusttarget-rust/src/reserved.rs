use std::{collections::HashMap, fmt::Display};

use once_cell::sync::Lazy;

pub const STRICT_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "Self", "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while",
];

pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "alignof", "become", "box", "do", "final", "macro", "offsetof", "override", "priv",
    "proc", "pure", "sizeof", "typeof", "unsized", "virtual", "yield",
];

pub const CONTEXTUAL_KEYWORDS: &[&str] = &["union", "dyn"];

pub const EDITION_2018_KEYWORDS: &[&str] = &["async", "await", "try", "catch"];

pub const PRELUDE: &[&str] = &[
    "Copy",
    "Send",
    "Sized",
    "Sync",
    "Drop",
    "Fn",
    "FnMut",
    "FnOnce",
    "drop",
    "Box",
    "ToOwned",
    "Clone",
    "PartialEq",
    "PartialOrd",
    "Eq",
    "Ord",
    "AsRef",
    "AsMut",
    "Into",
    "From",
    "Default",
    "Iterator",
    "Extend",
    "IntoIterator",
    "DoubleEndedIterator",
    "ExactSizeIterator",
    "Option",
    "Some",
    "None",
    "Result",
    "Ok",
    "Err",
    "SliceConcatExt",
    "String",
    "ToString",
    "Vec",
];

pub const PRIMITIVE_TYPES: &[&str] = &["bool", "char", "f32", "f64", "fn"];

pub const INTEGER_SIGNS: &[&str] = &["i", "u"];
pub const INTEGER_SIZES: &[&str] = &["8", "16", "32", "64", "128", "size"];

/// Names the generated parser code itself declares.
pub const GENERATOR_INTERNAL: &[&str] = &["rule", "parser_rule", "action"];

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum ReservedCategory {
    Keyword,
    ReservedKeyword,
    ContextualKeyword,
    Edition2018Keyword,
    Prelude,
    PrimitiveType,
    IntegerType,
    GeneratorInternal,
}

impl Display for ReservedCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ReservedCategory::Keyword => "keyword",
                ReservedCategory::ReservedKeyword => "reserved keyword",
                ReservedCategory::ContextualKeyword => "contextual keyword",
                ReservedCategory::Edition2018Keyword => "2018 edition keyword",
                ReservedCategory::Prelude => "prelude name",
                ReservedCategory::PrimitiveType => "primitive type",
                ReservedCategory::IntegerType => "integer type",
                ReservedCategory::GeneratorInternal => "generator internal name",
            }
        )
    }
}

static RESERVED_WORDS: Lazy<ReservedWords> = Lazy::new(ReservedWords::build);

/// Identifiers that cannot be emitted verbatim into generated Rust code.
///
/// A word listed in several categories keeps the first one it was added
/// under, so `fn` is a keyword rather than a primitive type.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ReservedWords {
    words: HashMap<String, ReservedCategory>,
}

impl ReservedWords {
    pub fn build() -> Self {
        let mut reserved = ReservedWords {
            words: HashMap::new(),
        };
        reserved.add_all(STRICT_KEYWORDS, ReservedCategory::Keyword);
        reserved.add_all(RESERVED_KEYWORDS, ReservedCategory::ReservedKeyword);
        reserved.add_all(CONTEXTUAL_KEYWORDS, ReservedCategory::ContextualKeyword);
        reserved.add_all(EDITION_2018_KEYWORDS, ReservedCategory::Edition2018Keyword);
        reserved.add_all(PRELUDE, ReservedCategory::Prelude);
        reserved.add_all(PRIMITIVE_TYPES, ReservedCategory::PrimitiveType);
        for name in integer_type_names() {
            reserved.add(name, ReservedCategory::IntegerType);
        }
        reserved.add_all(GENERATOR_INTERNAL, ReservedCategory::GeneratorInternal);
        log::debug!("built table of {} reserved Rust identifiers", reserved.len());
        reserved
    }

    /// The process-wide table, built on first use.
    pub fn shared() -> &'static ReservedWords {
        &RESERVED_WORDS
    }

    fn add_all(&mut self, words: &[&str], category: ReservedCategory) {
        for word in words {
            self.add(word.to_string(), category);
        }
    }

    fn add(&mut self, word: String, category: ReservedCategory) {
        self.words.entry(word).or_insert(category);
    }

    pub fn is_unsafe(&self, candidate: &str) -> bool {
        self.words.contains_key(candidate)
    }

    pub fn category(&self, candidate: &str) -> Option<ReservedCategory> {
        self.words.get(candidate).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All entries, sorted by word.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ReservedCategory)> {
        let mut entries: Vec<(&str, ReservedCategory)> = self
            .words
            .iter()
            .map(|(word, category)| (word.as_str(), *category))
            .collect();
        entries.sort();
        entries.into_iter()
    }
}

/// Every signed and unsigned integer type name, e.g. `i8` or `usize`.
pub fn integer_type_names() -> impl Iterator<Item = String> {
    INTEGER_SIZES.iter().flat_map(|size| {
        INTEGER_SIGNS
            .iter()
            .map(move |sign| format!("{}{}", sign, size))
    })
}
