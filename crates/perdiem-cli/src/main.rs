use perdiem_cli::{init, run_cli};

fn main() {
    init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run_cli(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
