fn main() {
    if let Err(e) = sensible_decoder::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
