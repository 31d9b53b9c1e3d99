use rusttarget_codegen::{unicode_escapes, Target};
use rusttarget_grammar::GrammarDescriptor;

mod naming;
mod reserved;

pub use reserved::{integer_type_names, ReservedCategory, ReservedWords};

const RUST_TARGET_VERSION: &str = "4.7.1";

pub struct RustTarget {
    reserved: &'static ReservedWords,
}

impl RustTarget {
    pub fn new() -> Self {
        RustTarget {
            reserved: ReservedWords::shared(),
        }
    }

    pub fn reserved_words(&self) -> &ReservedWords {
        self.reserved
    }
}

impl Default for RustTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for RustTarget {
    fn language(&self) -> &'static str {
        "Rust"
    }

    fn version(&self) -> &'static str {
        RUST_TARGET_VERSION
    }

    fn append_unicode_escaped_code_point(&self, code_point: u32, out: &mut String) {
        unicode_escapes::append_swift_style_escaped_code_point(code_point, out)
    }

    fn is_unsafe_identifier(&self, text: &str) -> bool {
        let unsafe_identifier = self.reserved.is_unsafe(text);
        if unsafe_identifier {
            log::trace!("grammar symbol {text} collides with a reserved Rust identifier");
        }
        unsafe_identifier
    }

    fn recognizer_file_name(&self, grammar: &dyn GrammarDescriptor, _header: bool) -> String {
        naming::recognizer_file_name(grammar)
    }

    fn listener_file_name(&self, grammar: &dyn GrammarDescriptor, _header: bool) -> String {
        naming::listener_file_name(grammar)
    }

    fn visitor_file_name(&self, grammar: &dyn GrammarDescriptor, _header: bool) -> String {
        naming::visitor_file_name(grammar)
    }
}
