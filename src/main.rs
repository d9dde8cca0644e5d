//! bizhours main entrypoint.

use bizhours::run;
use bizhours::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
