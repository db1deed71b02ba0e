use std::process::ExitCode;

fn main() -> ExitCode {
    match impact_estimator::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
