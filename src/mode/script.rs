//! Event script mode

use crate::output::{get_display_name, print_error};
use crate::view::parse_events;

use super::{RunOptions, finish, open_session, replay};

/// Replay an event script against a dataset and print the final view
pub(crate) fn run_script(options: &RunOptions, script_path: &str) {
    // Reject a malformed script before any event runs
    let events = std::fs::read_to_string(script_path)
        .map_err(|e| format!("Failed to read events file: {}", e))
        .and_then(|text| parse_events(&text))
        .unwrap_or_else(|e| {
            print_error(&format!("{}: {}", get_display_name(script_path), e));
            std::process::exit(1);
        });

    let (mut session, mut snapshot) = open_session(options);

    let rejected = replay(&mut session, &mut snapshot, &events);
    if !options.quiet {
        eprintln!("Replayed {} events ({} rejected)", events.len(), rejected);
    }

    finish(&session, &snapshot, options);
}
