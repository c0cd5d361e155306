//! Output window binary entry point.

fn main() {
    let exit_code = run_and_report(outpane_gui::run);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_and_report<F, E>(runner: F) -> i32
where
    F: FnOnce() -> Result<(), E>,
    E: std::fmt::Display,
{
    match runner() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("outpane: output window failed: {}", err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run_and_report;

    #[test]
    fn clean_shutdown_exits_with_zero() {
        assert_eq!(run_and_report(|| Ok::<(), &str>(())), 0);
    }

    #[test]
    fn window_startup_failure_exits_with_one() {
        let err = std::io::Error::other("no display");
        assert_eq!(run_and_report(|| Err::<(), _>(err)), 1);
    }
}
