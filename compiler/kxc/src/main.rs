//! `kx`: evaluate IP-XACT constant expressions from the command line.

use kxc::commands::run;
use kxc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
