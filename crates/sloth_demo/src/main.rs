//! Sloth CLI
//!
//! Walks through thunks, short-circuit combinators and lazy infinite
//! streams, printing what gets forced and when.

mod options;
mod tracing_setup;
mod walkthrough;

use sloth_core::{silent_sink, stdout_sink};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match options::parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{}", options::usage());
            std::process::exit(1);
        }
    };

    let sink = if options.silent {
        silent_sink()
    } else {
        stdout_sink()
    };
    walkthrough::run(&options.command, &sink);
}
