//! Binary entry point. All terminal handling lives in `cli/`; see the
//! library docs for the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
