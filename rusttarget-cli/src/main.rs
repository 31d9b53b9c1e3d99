use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use owo_colors::OwoColorize;
use rusttarget_codegen::Target;
use rusttarget_grammar::{GrammarKind, UncheckedGrammar};
use rusttarget_rust::RustTarget;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLine {
    #[arg(long, help = "The declared name of the grammar")]
    name: Option<String>,
    #[arg(
        short,
        long,
        help = "The grammar kind: parser, lexer or combined",
        default_value_t = GrammarKind::Combined.to_string()
    )]
    kind: String,
    #[arg(long, help = "Name header files (no effect for Rust)")]
    header: bool,
    #[arg(long, help = "Print every reserved identifier and exit")]
    reserved: bool,
    #[arg(long, help = "Print the target version and exit")]
    target_version: bool,
    #[arg(help = "Rule and token names to check")]
    symbols: Vec<String>,
}

fn print_reserved(target: &RustTarget) {
    for (word, category) in target.reserved_words().iter() {
        println!("{:<24}{}", word, category);
    }
}

fn report(cli: &CommandLine, target: &RustTarget) -> Result<()> {
    let name = cli
        .name
        .as_deref()
        .ok_or_else(|| eyre!("a grammar name is required, pass one with --name"))?;
    if name.is_empty() {
        return Err(eyre!("the grammar name must not be empty"));
    }
    let grammar = UncheckedGrammar {
        name: Some(name.to_string()),
        kind_tag: cli.kind.clone(),
    };

    let names = target.artifact_file_names(&grammar, cli.header);
    if !names.is_valid() {
        let kind_error = cli.kind.parse::<GrammarKind>().err();
        return Err(match kind_error {
            Some(e) => eyre!(e),
            None => eyre!("could not name the recognizer of grammar {}", name),
        });
    }
    for (artifact, file_name) in names.iter() {
        println!("{:>10}: {}", artifact, file_name.bold());
    }

    let unsafe_symbols = target.unsafe_symbols(&cli.symbols);
    for symbol in &unsafe_symbols {
        let category = target
            .reserved_words()
            .category(symbol)
            .map(|c| c.to_string())
            .unwrap_or_default();
        eprintln!(
            "{}: symbol {} collides with a Rust {}",
            "warning".bright_yellow().bold(),
            symbol.bold(),
            category
        );
    }
    log::info!(
        "checked {} symbols, {} unsafe",
        cli.symbols.len(),
        unsafe_symbols.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let cli = CommandLine::parse();
    let target = RustTarget::new();
    if cli.target_version {
        println!("{} target {}", target.language(), target.version());
        return Ok(());
    }
    if cli.reserved {
        print_reserved(&target);
        return Ok(());
    }
    report(&cli, &target)
}
