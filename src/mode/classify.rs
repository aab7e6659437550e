//! Classification mode driven by command line drags

use crate::output::print_warning;
use crate::view::ViewEvent;

use super::{RunOptions, finish, open_session};

/// A `--drag` flag becomes a full begin/move/end gesture
fn drag_gesture(index: usize, position: f64) -> [ViewEvent; 3] {
    [
        ViewEvent::BeginDrag(index),
        ViewEvent::DragMove { index, position },
        ViewEvent::DragEnd(index),
    ]
}

/// Classify a dataset, apply `--drag` gestures and print the result
pub(crate) fn run_classify(options: &RunOptions, drags: &[(usize, f64)]) {
    let (mut session, mut snapshot) = open_session(options);

    let mut applied = 0;
    for &(index, position) in drags {
        // A gesture stops at its first rejected event
        let result = drag_gesture(index, position)
            .iter()
            .try_for_each(|event| session.apply(event, &mut snapshot));
        match result {
            Ok(()) => applied += 1,
            Err(e) => print_warning(&format!("drag {}:{} ignored: {}", index, position, e)),
        }
    }

    if !options.quiet && !drags.is_empty() {
        eprintln!("Applied {} of {} drags", applied, drags.len());
    }

    finish(&session, &snapshot, options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_expands_to_gesture() {
        let events = drag_gesture(1, 80.0);
        assert_eq!(events[0], ViewEvent::BeginDrag(1));
        assert_eq!(
            events[1],
            ViewEvent::DragMove {
                index: 1,
                position: 80.0
            }
        );
        assert_eq!(events[2], ViewEvent::DragEnd(1));
    }
}
