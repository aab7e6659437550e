//! Selection and drag gesture events, and their text form

use std::fmt;

/// One user interaction delivered to a session
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ViewEvent {
    SelectVariable(String),
    SelectClassCount(usize),
    BeginDrag(usize),
    DragMove { index: usize, position: f64 },
    DragEnd(usize),
}

impl fmt::Display for ViewEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewEvent::SelectVariable(name) => write!(f, "variable {}", name),
            ViewEvent::SelectClassCount(count) => write!(f, "classes {}", count),
            ViewEvent::BeginDrag(index) => write!(f, "begin {}", index),
            ViewEvent::DragMove { index, position } => write!(f, "move {} {}", index, position),
            ViewEvent::DragEnd(index) => write!(f, "end {}", index),
        }
    }
}

fn parse_index(token: Option<&str>) -> Result<usize, String> {
    let token = token.ok_or("missing break index")?;
    token
        .parse()
        .map_err(|_| format!("invalid break index '{}'", token))
}

fn parse_position(token: Option<&str>) -> Result<f64, String> {
    let token = token.ok_or("missing position")?;
    token
        .parse::<f64>()
        .ok()
        .filter(|p| !p.is_nan())
        .ok_or_else(|| format!("invalid position '{}'", token))
}

/// Parse one script line. `drag` expands to a move followed by an end.
fn parse_line(line: &str) -> Result<Vec<ViewEvent>, String> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(Vec::new());
    };

    let events = match keyword {
        "variable" => {
            let name = tokens.next().ok_or("missing variable name")?;
            vec![ViewEvent::SelectVariable(name.to_string())]
        }
        "classes" => {
            let token = tokens.next().ok_or("missing class count")?;
            let count = token
                .parse()
                .map_err(|_| format!("invalid class count '{}'", token))?;
            vec![ViewEvent::SelectClassCount(count)]
        }
        "begin" => vec![ViewEvent::BeginDrag(parse_index(tokens.next())?)],
        "move" | "drag" => {
            let index = parse_index(tokens.next())?;
            let position = parse_position(tokens.next())?;
            let mut events = vec![ViewEvent::DragMove { index, position }];
            if keyword == "drag" {
                events.push(ViewEvent::DragEnd(index));
            }
            events
        }
        "end" => vec![ViewEvent::DragEnd(parse_index(tokens.next())?)],
        other => return Err(format!("unknown event '{}'", other)),
    };

    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected '{}'", extra));
    }
    Ok(events)
}

/// Parse an event script. Fails on the first malformed line.
pub(crate) fn parse_events(script: &str) -> Result<Vec<ViewEvent>, String> {
    let mut events = Vec::new();
    for (number, raw) in script.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        let parsed = parse_line(line).map_err(|e| format!("line {}: {}", number + 1, e))?;
        events.extend(parsed);
    }
    Ok(events)
}

/// Parse a `--drag INDEX:POSITION` flag
pub(crate) fn parse_drag_flag(s: &str) -> Result<(usize, f64), String> {
    let (index, position) = s
        .split_once(':')
        .ok_or_else(|| format!("expected INDEX:POSITION, got '{}'", s))?;
    Ok((
        parse_index(Some(index.trim()))?,
        parse_position(Some(position.trim()))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_script() {
        let script = "\
# switch variable, then refine
variable deaths_per_mil
classes 6

begin 2
move 2 150.5
end 2
drag 1 80   # shorthand
";
        let events = parse_events(script).unwrap();
        assert_eq!(
            events,
            vec![
                ViewEvent::SelectVariable("deaths_per_mil".to_string()),
                ViewEvent::SelectClassCount(6),
                ViewEvent::BeginDrag(2),
                ViewEvent::DragMove {
                    index: 2,
                    position: 150.5
                },
                ViewEvent::DragEnd(2),
                ViewEvent::DragMove {
                    index: 1,
                    position: 80.0
                },
                ViewEvent::DragEnd(1),
            ]
        );
    }

    #[test]
    fn test_unknown_keyword_reports_line() {
        let err = parse_events("classes 5\nzoom 3\n").unwrap_err();
        assert!(err.contains("line 2"), "got: {}", err);
        assert!(err.contains("zoom"));
    }

    #[test]
    fn test_malformed_numbers_are_rejected() {
        assert!(parse_events("classes five").is_err());
        assert!(parse_events("move -1 20").is_err());
        assert!(parse_events("move 1 NaN").is_err());
        assert!(parse_events("move 1").is_err());
        assert!(parse_events("end 1 2").is_err());
    }

    #[test]
    fn test_out_of_range_values_still_parse() {
        // Range checks belong to the session
        let events = parse_events("classes 9\nmove 1 -1e6").unwrap();
        assert_eq!(events[0], ViewEvent::SelectClassCount(9));
        assert_eq!(
            events[1],
            ViewEvent::DragMove {
                index: 1,
                position: -1e6
            }
        );
    }

    #[test]
    fn test_parse_drag_flag() {
        assert_eq!(parse_drag_flag("1:120").unwrap(), (1, 120.0));
        assert_eq!(parse_drag_flag(" 0 : -3.5 ").unwrap(), (0, -3.5));
        assert!(parse_drag_flag("1").is_err());
        assert!(parse_drag_flag("a:1").is_err());
    }

    #[test]
    fn test_display_matches_script_syntax() {
        let event = ViewEvent::DragMove {
            index: 3,
            position: 12.5,
        };
        assert_eq!(event.to_string(), "move 3 12.5");
        assert_eq!(parse_events(&event.to_string()).unwrap(), vec![event]);
    }
}
