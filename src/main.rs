//! attendance-tracker main entrypoint.

use attendance_tracker::run;
use attendance_tracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
