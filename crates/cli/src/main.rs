fn main() {
    if let Err(e) = mapshelf_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
