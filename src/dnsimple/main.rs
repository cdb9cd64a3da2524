mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }
}
