fn main() {
    if let Err(e) = contrato_gen::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
