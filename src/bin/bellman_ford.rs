use bellman_sssp::io::{format_report, read_digraph};
use bellman_sssp::BellmanFordSP;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <graph-file> <source>", args[0]);
        return ExitCode::from(2);
    }

    let source: usize = match args[2].parse() {
        Ok(source) => source,
        Err(_) => {
            eprintln!("source must be a vertex index, got {:?}", args[2]);
            return ExitCode::from(2);
        }
    };

    match run(&args[1], source) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, source: usize) -> bellman_sssp::Result<String> {
    let graph = read_digraph(path)?;
    let sp = BellmanFordSP::new(&graph, source)?;
    format_report(&sp)
}
