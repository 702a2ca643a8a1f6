/// Room/code normalization between the two naming vocabularies
///
/// The weekly schedule and the floor-plan schematic were authored
/// independently and name the same rooms differently:
/// - schedule naming:  "2.01", "1.05", "WS-0.13"
/// - schematic naming: "C-201", "L-105", "WS-13"
///
/// Everything here is a pure string transform: deterministic, no side
/// effects, and it never panics. When an input does not match a known
/// pattern the functions fall back to returning it unchanged, which means
/// an unrecognized name silently fails to correlate with schedule data.
/// That fallback is the documented behavior, not an error.

/// Collapse a schedule-naming room code into a comparison id
///
/// Strips the first "0." and any remaining dots:
/// "2.01" -> "201", "1.05" -> "105", "WS-0.13" -> "WS-13"
pub fn schedule_code_to_id(code: &str) -> String {
    code.replacen("0.", "", 1).replace('.', "")
}

/// Collapse a schematic-naming room name into a comparison id
///
/// Scans for the first occurrence of `(C|Lab|L|WS)` followed by an optional
/// hyphen, an optional space, and digits, case-insensitively. A WS prefix
/// keeps the prefix with leading zeros dropped from the number ("WS-13" ->
/// "WS13", "WS-013" -> "WS13"); the other prefixes yield the bare digit
/// string ("C-201" -> "201"). No match returns the input unchanged.
pub fn schematic_name_to_id(name: &str) -> String {
    let bytes = name.as_bytes();
    for at in 0..bytes.len() {
        if let Some(id) = match_room_pattern(name, at) {
            return id;
        }
    }
    name.to_string()
}

/// Try to match the room pattern starting at byte offset `at`.
/// Prefix alternation order matters: "Lab" must be tried before "L".
fn match_room_pattern(name: &str, at: usize) -> Option<String> {
    if !name.is_char_boundary(at) {
        return None;
    }
    let tail = &name[at..];
    let upper = tail.to_ascii_uppercase();
    let (prefix_len, is_workshop) = if upper.starts_with('C') {
        (1, false)
    } else if upper.starts_with("LAB") {
        (3, false)
    } else if upper.starts_with('L') {
        (1, false)
    } else if upper.starts_with("WS") {
        (2, true)
    } else {
        return None;
    };

    let mut rest = &tail[prefix_len..];
    rest = rest.strip_prefix('-').unwrap_or(rest);
    rest = rest
        .strip_prefix(|c: char| c.is_whitespace())
        .unwrap_or(rest);

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    if is_workshop {
        let trimmed = digits.trim_start_matches('0');
        let number = if trimmed.is_empty() { "0" } else { trimmed };
        Some(format!("WS{}", number))
    } else {
        Some(digits)
    }
}

/// Whether two normalized ids refer to the same physical room
///
/// Workshops compare by exact string equality on the "WS..." id. Everything
/// else compares by string equality only when both ids are exactly three
/// characters long. The 3-digit length check reflects how the source data
/// numbers its rooms; it is preserved as observed rather than generalized,
/// and the test suite flags it as a known data-coupling risk.
pub fn same_room(a: &str, b: &str) -> bool {
    let a_ws = a.starts_with("WS");
    let b_ws = b.starts_with("WS");
    if a_ws && b_ws {
        return a == b;
    }
    if !a_ws && !b_ws {
        return a.len() == 3 && b.len() == 3 && a == b;
    }
    false
}

/// Room category label from the schedule-code prefix
///
/// "1." rooms are labs, "2." rooms are classrooms, "WS-" rooms are
/// workshops. Anything else has no category and is displayed as-is.
pub fn room_category(code: &str) -> Option<&'static str> {
    if code.starts_with("1.") {
        Some("Lab")
    } else if code.starts_with("2.") {
        Some("Classroom")
    } else if code.starts_with("WS-") {
        Some("Workshop")
    } else {
        None
    }
}

/// Schematic-style display name for a schedule code
///
/// "2.01" -> "C-201", "1.05" -> "L-105", "WS-0.13" -> "WS-13".
/// Codes without a known category pass through unchanged.
pub fn room_display_name(code: &str) -> String {
    let id = schedule_code_to_id(code);
    if code.starts_with("1.") {
        format!("L-{}", id)
    } else if code.starts_with("2.") {
        format!("C-{}", id)
    } else if code.starts_with("WS-") {
        id
    } else {
        code.to_string()
    }
}

/// Human location string for a schedule code, e.g. "Classroom: C-201"
///
/// Used by the status engine for per-student locations. Codes without a
/// known category pass through as the bare code.
pub fn room_location_label(code: &str) -> String {
    match room_category(code) {
        Some(category) => format!("{}: {}", category, room_display_name(code)),
        None => code.to_string(),
    }
}
