mod args;
mod demo;

use std::process;

fn main() {
    let args = args::parse();
    if let Err(e) = demo::run(&args) {
        eprintln!("gridlife: {e}");
        process::exit(1);
    }
}
