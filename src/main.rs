fn main() {
    if let Err(e) = mermaid2drawio::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
