use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use recursive_descent::{
    display_error,
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    normalize_source_path,
    parser::parser::parse,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tokenize and validate a program of assignment statements.
#[derive(Parser, Debug)]
#[command(name = "rdp", version, about)]
struct Args {
    /// Source file; `--extension` is appended when it has none
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Extension appended to FILE when it has none
    #[arg(long, default_value = "txt")]
    extension: String,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Do not print the symbol table after a successful parse
    #[arg(long)]
    no_symbols: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_tokens(source: &str, file: &str) -> Result<(), Error> {
    let mut lexer = Lexer::new(source.to_string(), Some(file.to_string()));

    loop {
        let token = lexer.next_token()?;
        if token.kind == TokenKind::End {
            return Ok(());
        }
        println!("{:>4}  {:<18} {}", token.line, token.kind.to_string(), token.value);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let path = normalize_source_path(&args.file, &args.extension);

    let start = Instant::now();
    let mut lexer = match Lexer::from_path(&path) {
        Ok(lexer) => lexer,
        Err(error) => {
            display_error(&error, "");
            return ExitCode::FAILURE;
        }
    };

    info!(path = %path.display(), bytes = lexer.source().len(), "read source in {:?}", start.elapsed());

    if args.tokens {
        let file = lexer.file();
        if let Err(error) = print_tokens(lexer.source(), &file) {
            display_error(&error, lexer.source());
            return ExitCode::FAILURE;
        }
    }

    let parse_start = Instant::now();
    let result = parse(&mut lexer);

    info!("parsed in {:?}", parse_start.elapsed());

    if let Err(error) = result {
        display_error(&error, lexer.source());
        return ExitCode::FAILURE;
    }

    println!("Parsing successful!");

    if !args.no_symbols {
        println!();
        print!("{}", lexer.symbols());
    }

    ExitCode::SUCCESS
}
