use rusttarget_codegen::INVALID_FILE_NAME;
use rusttarget_grammar::{GrammarDescriptor, GrammarKind};

const SOURCE_EXTENSION: &str = ".rs";

fn declared_name(grammar: &dyn GrammarDescriptor) -> &str {
    let name = match grammar.name() {
        Some(name) => name,
        None => panic!("grammar has no declared name"),
    };
    assert!(!name.is_empty(), "grammar has an empty declared name");
    name
}

fn file_name(stem: &str, suffix: &str) -> String {
    format!("{}_{}{}", stem.to_lowercase(), suffix, SOURCE_EXTENSION)
}

/// `TestParser` and `TestLexer` become `test_parser.rs` and `test_lexer.rs`;
/// a combined grammar `Test` becomes `test_parser.rs`.
pub fn recognizer_file_name(grammar: &dyn GrammarDescriptor) -> String {
    let name = declared_name(grammar);
    match grammar.kind() {
        Some(GrammarKind::Parser) => {
            file_name(name.strip_suffix("Parser").unwrap_or(name), "parser")
        }
        Some(GrammarKind::Lexer) => file_name(name.strip_suffix("Lexer").unwrap_or(name), "lexer"),
        Some(GrammarKind::Combined) => file_name(name, "parser"),
        None => {
            log::warn!("cannot name the recognizer of grammar {name}, its kind is unknown");
            INVALID_FILE_NAME.to_string()
        }
    }
}

pub fn listener_file_name(grammar: &dyn GrammarDescriptor) -> String {
    file_name(declared_name(grammar), "listener")
}

pub fn visitor_file_name(grammar: &dyn GrammarDescriptor) -> String {
    file_name(declared_name(grammar), "visitor")
}
