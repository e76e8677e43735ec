fn main() {
    if let Err(e) = hostfile::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
