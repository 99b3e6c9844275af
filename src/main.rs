//! eldgraph main entrypoint.

use eldgraph::run;
use eldgraph::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
