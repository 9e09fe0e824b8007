use serverwidget_core::cli::{error_line, run_cli};

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("{}", error_line(&err));
        std::process::exit(1);
    }
}
