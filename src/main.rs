use std::fs;
use std::io::{self, Read};

use clap::{CommandFactory, Parser};

use funge93::grid::Grid;
use funge93::session::{Session, Status};

#[derive(Parser)]
#[command(name = "funge93", about = "Befunge-93: an interpreter for a two-dimensional language")]
struct Cli {
    /// Path to the program file, or `-` to read the program from stdin.
    #[arg(value_name = "PROGRAM")]
    program: Vec<String>,

    /// Seed for the random-direction opcode `?` (defaults to OS entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many steps if the program has not halted.
    #[arg(long)]
    max_steps: Option<usize>,
}

fn main() {
    let cli = Cli::parse();

    // Anything other than exactly one path is treated as a request for usage.
    let path = match cli.program.as_slice() {
        [path] => path.clone(),
        _ => {
            let _ = Cli::command().print_help();
            return;
        }
    };

    let source = if path == "-" {
        // The program comes from stdin, so the session's own reads from
        // stdin will see end-of-file.
        let mut bytes = Vec::new();
        if let Err(e) = io::stdin().lock().read_to_end(&mut bytes) {
            eprintln!("fatal: could not read program from stdin: {e}");
            std::process::exit(1);
        }
        bytes
    } else {
        match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("fatal: could not read program file '{path}': {e}");
                std::process::exit(1);
            }
        }
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(
        Grid::from_source(&source),
        io::stdin().lock(),
        io::stdout().lock(),
        seed,
    );

    let result = match cli.max_steps {
        Some(limit) => match session.run_bounded(limit) {
            Ok(Status::Running) => {
                eprintln!("fatal: program did not halt within {limit} steps");
                std::process::exit(1);
            }
            other => other.map(|_| ()),
        },
        None => session.run(),
    };
    if let Err(e) = result {
        eprintln!("fatal: {e}");
        std::process::exit(1);
    }
}
