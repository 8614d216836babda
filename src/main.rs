fn main() {
    env_logger::init();

    if let Err(e) = heartfield::run() {
        eprintln!("heartfield failed: {}", e);
        std::process::exit(1);
    }
}
