use rusttarget_grammar::{GrammarDescriptor, GrammarSymbol};

pub mod unicode_escapes;

/// Returned as a recognizer file name when the grammar kind is not one the
/// target knows how to name.
pub const INVALID_FILE_NAME: &str = "INVALID_FILE_NAME";

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ArtifactFileNames {
    pub recognizer: String,
    pub listener: String,
    pub visitor: String,
}

impl ArtifactFileNames {
    pub fn is_valid(&self) -> bool {
        self.recognizer != INVALID_FILE_NAME
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("recognizer", self.recognizer.as_str()),
            ("listener", self.listener.as_str()),
            ("visitor", self.visitor.as_str()),
        ]
        .into_iter()
    }
}

/// A destination language for generated recognizers.
///
/// The `header` parameters exist for targets that split declarations and
/// definitions into separate files.
pub trait Target {
    fn language(&self) -> &'static str;
    fn version(&self) -> &'static str;

    fn append_unicode_escaped_code_point(&self, code_point: u32, out: &mut String);

    /// Whether emitting `text` verbatim as an identifier breaks the generated
    /// code.
    fn is_unsafe_identifier(&self, text: &str) -> bool;

    fn symbol_causes_issue(&self, symbol: &dyn GrammarSymbol) -> bool {
        self.is_unsafe_identifier(symbol.text())
    }

    fn recognizer_file_name(&self, grammar: &dyn GrammarDescriptor, header: bool) -> String;
    fn listener_file_name(&self, grammar: &dyn GrammarDescriptor, header: bool) -> String;
    fn visitor_file_name(&self, grammar: &dyn GrammarDescriptor, header: bool) -> String;

    fn artifact_file_names(
        &self,
        grammar: &dyn GrammarDescriptor,
        header: bool,
    ) -> ArtifactFileNames {
        ArtifactFileNames {
            recognizer: self.recognizer_file_name(grammar, header),
            listener: self.listener_file_name(grammar, header),
            visitor: self.visitor_file_name(grammar, header),
        }
    }

    fn unsafe_symbols<'sym, I, S>(&self, symbols: I) -> Vec<&'sym str>
    where
        Self: Sized,
        I: IntoIterator<Item = &'sym S>,
        S: GrammarSymbol + ?Sized + 'sym,
    {
        let result: Vec<&str> = symbols
            .into_iter()
            .map(|symbol| symbol.text())
            .filter(|text| self.is_unsafe_identifier(text))
            .collect();
        if !result.is_empty() {
            log::debug!(
                "{} grammar symbols collide with {} identifiers",
                result.len(),
                self.language()
            );
        }
        result
    }
}
