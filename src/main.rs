use plum_draughts::cli::cli_top::run_stdio_loop;

fn main() {
    if let Err(err) = run_stdio_loop() {
        eprintln!("fatal I/O error: {err}");
        std::process::exit(1);
    }
}
