fn main() {
    if let Err(e) = tagscan_cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
