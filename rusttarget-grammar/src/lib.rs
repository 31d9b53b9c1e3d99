use std::{
    error::Error,
    fmt::{Display, Formatter},
    str::FromStr,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum GrammarKind {
    Parser,
    Lexer,
    Combined,
}

impl Display for GrammarKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GrammarKind::Parser => "parser",
                GrammarKind::Lexer => "lexer",
                GrammarKind::Combined => "combined",
            }
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownGrammarKind {
    pub tag: String,
}

impl Error for UnknownGrammarKind {}
impl Display for UnknownGrammarKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "unknown grammar kind '{}', expected one of parser, lexer or combined",
            self.tag
        )
    }
}

impl FromStr for GrammarKind {
    type Err = UnknownGrammarKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parser" => Ok(GrammarKind::Parser),
            "lexer" => Ok(GrammarKind::Lexer),
            "combined" => Ok(GrammarKind::Combined),
            _ => Err(UnknownGrammarKind { tag: s.to_string() }),
        }
    }
}

/// The parts of a grammar that a target needs to name its output files.
///
/// `name` is `None` only when upstream validation failed to reject a
/// grammar without a declaration. `kind` is `None` when the descriptor was
/// built from a tag that is not a known grammar kind.
pub trait GrammarDescriptor {
    fn name(&self) -> Option<&str>;
    fn kind(&self) -> Option<GrammarKind>;
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grammar {
    pub name: String,
    pub kind: GrammarKind,
}

impl Grammar {
    pub fn new(name: &str, kind: GrammarKind) -> Self {
        Grammar {
            name: name.to_string(),
            kind,
        }
    }
}

impl GrammarDescriptor for Grammar {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn kind(&self) -> Option<GrammarKind> {
        Some(self.kind)
    }
}

/// A grammar whose kind is still the raw tag read from its declaration.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UncheckedGrammar {
    pub name: Option<String>,
    pub kind_tag: String,
}

impl GrammarDescriptor for UncheckedGrammar {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn kind(&self) -> Option<GrammarKind> {
        self.kind_tag.parse().ok()
    }
}

/// An identifier declared by a grammar, such as a rule or token name.
pub trait GrammarSymbol {
    fn text(&self) -> &str;
}

impl GrammarSymbol for str {
    fn text(&self) -> &str {
        self
    }
}

impl GrammarSymbol for String {
    fn text(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolRole {
    Rule,
    Token,
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct GrammarSymbolNode {
    pub role: SymbolRole,
    pub text: String,
}

impl GrammarSymbolNode {
    pub fn rule(text: &str) -> Self {
        GrammarSymbolNode {
            role: SymbolRole::Rule,
            text: text.to_string(),
        }
    }

    pub fn token(text: &str) -> Self {
        GrammarSymbolNode {
            role: SymbolRole::Token,
            text: text.to_string(),
        }
    }
}

impl GrammarSymbol for GrammarSymbolNode {
    fn text(&self) -> &str {
        &self.text
    }
}
