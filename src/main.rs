fn main() {
    if let Err(e) = eos80_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
