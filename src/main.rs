use std::fs;

use clap::Parser;
use impish::{
    get_result,
    interpreter::{output::StdoutSink, scope::Binding},
};
use tracing_subscriber::EnvFilter;

/// impish runs programs written in a small imperative language of numbers,
/// booleans, `if`, `while` and `print`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells impish to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints every variable of the final state, sorted by name, once the
    /// program has finished.
    #[arg(short, long)]
    dump_state: bool,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env()
                                                  .unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let state = match get_result(&script, &mut StdoutSink) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    if args.dump_state {
        let mut bindings: Vec<_> = state.iter().collect();
        bindings.sort_by_key(|(name, _)| *name);
        for (name, binding) in bindings {
            match binding {
                Binding::Value(value) => println!("{name} = {value}"),
                Binding::Scope(_) => println!("{name} = <scope>"),
            }
        }
    }
}
