use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use terracalc::{
    Calculator,
    interpreter::evaluator::core::{DEFAULT_DUMP_PATH, DEFAULT_MAX_DEPTH, EvaluatorOptions},
};

/// terracalc is a line-oriented calculator with variables and user-defined
/// functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells terracalc to read the lines from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Where `dump_env()` writes its snapshot.
    #[arg(long, default_value = DEFAULT_DUMP_PATH)]
    dump_path: PathBuf,

    /// How deeply evaluation may nest, counting sub-expressions and function
    /// calls, before it fails with a recursion error.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Lines to evaluate. Without it, lines are read from standard input.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut calculator = Calculator::with_options(EvaluatorOptions { dump_path: args.dump_path,
                                                                     max_depth: args.max_depth, });

    let script = match (args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(&path).unwrap_or_else(|_| {
                                                           eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                                           std::process::exit(1);
                                                       }),
        (Some(contents), false) => contents,
        (None, _) => {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => print_output(&calculator.evaluate(&line)),
                    Err(e) => {
                        eprintln!("Failed to read from standard input: {e}");
                        std::process::exit(1);
                    },
                }
            }
            return;
        },
    };

    for line in script.lines() {
        print_output(&calculator.evaluate(line));
    }
}

fn print_output(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
