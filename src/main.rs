//! arrowc Compiler CLI

use arrowc::diagnostics::Diagnostics;
use arrowc::{compile, Lexer, Parser, VERSION};
use clap::Parser as ClapParser;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "arrowc")]
#[command(version = VERSION)]
#[command(about = "Lowers arrow-function bindings to ES5 function expressions", long_about = None)]
struct Args {
    /// Source file to compile
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the token stream for debugging
    #[arg(long)]
    emit_tokens: bool,

    /// Emit the source AST for debugging
    #[arg(long)]
    emit_ast: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let source = match fs::read_to_string(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {}: {}", args.input.display(), e);
            process::exit(1);
        }
    };

    if args.verbose {
        println!("Compiling: {}", args.input.display());
        println!("Source: {} bytes, {} lines", source.len(), source.lines().count());
    }

    let filename = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("input");
    let diag = Diagnostics::new(&source, filename);

    if args.emit_tokens || args.emit_ast {
        let tokens = match Lexer::new(&source).tokenize() {
            Ok(tokens) => tokens,
            Err(e) => {
                eprint!("{}", diag.format_error(&e));
                process::exit(1);
            }
        };
        if args.emit_tokens {
            println!("{:#?}", tokens);
        }
        if args.emit_ast {
            match Parser::new(&tokens).parse() {
                Ok(program) => println!("{:#?}", program),
                Err(e) => {
                    eprint!("{}", diag.format_error(&e));
                    process::exit(1);
                }
            }
        }
    }

    match compile(&source) {
        Ok(output) => match &args.output {
            Some(path) => {
                if let Err(e) = fs::write(path, &output) {
                    eprintln!("Failed to write output: {}", e);
                    process::exit(1);
                }
                if args.verbose {
                    println!("Compiled to: {} ({} bytes)", path.display(), output.len());
                }
            }
            None => println!("{}", output),
        },
        Err(e) => {
            eprint!("{}", diag.format_error(&e));
            process::exit(1);
        }
    }
}
