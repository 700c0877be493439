//! mighty main entrypoint.

use mighty::run;
use mighty::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
