use std::io::{self, Write};

use clap::Parser;
use shunt::{
    evaluate_postfix_str, get_postfix, get_result, interpreter::evaluator::evaluate,
    util::num::format_result,
};
use tracing::{Level, debug};

const PROMPT: &str = "Enter a math expression (e.g., 3 + 5 * (2 - 4)):";

/// shunt evaluates arithmetic expressions written in infix notation using
/// the shunting-yard algorithm.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the input as postfix (Reverse Polish) notation.
    #[arg(short, long)]
    rpn: bool,

    /// Prints the postfix form of the expression before the result.
    #[arg(short, long, conflicts_with = "rpn")]
    show_postfix: bool,

    /// Shows more in logs, may be provided multiple times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Read from standard input when omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let filter_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(filter_level)
                             .with_writer(io::stderr)
                             .init();

    let outcome = read_expression(args.expression).and_then(|source| {
                      debug!(source = %source, rpn = args.rpn, "evaluating");
                      run(&source, args.rpn, args.show_postfix)
                  });

    match outcome {
        Ok(value) => println!("Result: {}", format_result(value)),
        Err(e) => println!("Error in expression: {e}"),
    }
}

/// Returns the expression given on the command line, or prompts for one line
/// on standard input.
fn read_expression(expression: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(expression) = expression {
        return Ok(expression);
    }

    println!("{PROMPT}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn run(source: &str, rpn: bool, show_postfix: bool) -> Result<f64, Box<dyn std::error::Error>> {
    if rpn {
        return evaluate_postfix_str(source);
    }

    if show_postfix {
        let postfix = get_postfix(source)?;
        println!("Postfix: {postfix}");
        return Ok(evaluate(&postfix)?);
    }
    get_result(source)
}
