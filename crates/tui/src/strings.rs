// Centralized UI strings and labels. ASCII-friendly by default.

use unicode_width::UnicodeWidthStr;

// UI block titles (keep surrounding spaces for visual padding)
pub const TITLE_ETHANOL: &str = " Ethanol (R$/L) ";
pub const TITLE_GASOLINE: &str = " Gasoline (R$/L) ";
pub const TITLE_VERDICT: &str = " Verdict ";
pub const TITLE_HISTORY: &str = " History ";
pub const TITLE_CONFIRM: &str = " Confirm ";
pub const TITLE_HELP: &str = " Help / Shortcuts ";

pub const RESULT_PLACEHOLDER: &str = "Enter both prices, then press Enter";
pub const EMPTY_HISTORY: &str = "No comparisons yet.";
pub const HISTORY_FOOTER: &str = "Esc closes  |  Up/Down, PgUp/PgDn, wheel: scroll";

pub fn confirm_clear_message(count: usize) -> String {
    format!(
        "Discard all {} saved comparison(s)? Press Y to confirm, N/Esc to cancel.",
        count
    )
}

// Build the status bar line with width-aware compaction: fixed state
// segments first, then hints in order of importance while space allows.
pub fn build_status_line(focus: &str, history_len: usize, max_width: u16) -> String {
    let mut segments: Vec<String> = Vec::new();
    segments.push(format!("[{}]", focus));
    segments.push(format!("Hist:{}", history_len));
    let hints: [&str; 6] = [
        "Enter: compare",
        "Tab: switch field",
        "F2: history",
        "Ctrl+L: clear",
        "?: help",
        "Esc: quit",
    ];
    for h in hints {
        segments.push(h.to_string());
    }

    let sep = "  |  ";
    let mut out = String::new();
    let mut used = 0usize;
    for (i, seg) in segments.iter().enumerate() {
        let segw = UnicodeWidthStr::width(seg.as_str());
        let addw = segw
            + if i == 0 {
                0
            } else {
                UnicodeWidthStr::width(sep)
            };
        if used + addw > max_width as usize {
            break;
        }
        if i > 0 {
            out.push_str(sep);
            used += UnicodeWidthStr::width(sep);
        }
        out.push_str(seg);
        used += segw;
    }
    out
}

// ASCII help lines content; UI maps to styled lines.
pub fn help_lines_ascii() -> &'static [&'static str] {
    &[
        "Basic",
        "  Enter: Compare prices    Esc/Ctrl-C: Quit",
        "Fields",
        "  Tab/Shift+Tab: Switch field    Up/Down: Jump to field    Click: Focus field",
        "  Left/Right: Move cursor    Home/End: Line start/end",
        "  Backspace/Delete: Delete prev/next char    Ctrl+U: Clear field",
        "  Digits and one decimal separator (. or ,) are accepted",
        "History",
        "  F2: Open/close history    Up/Down, PgUp/PgDn, mouse wheel: Scroll",
        "  Ctrl+L: Clear history (asks for confirmation)",
        "Help",
        "  ?: Open/close this panel    F1: Open/close this panel",
    ]
}

#[cfg(test)]
mod tests {
    use super::build_status_line;

    #[test]
    fn status_line_fits_width() {
        let line = build_status_line("Ethanol", 3, 24);
        assert!(line.starts_with("[Ethanol]"));
        assert!(line.len() <= 24);
    }

    #[test]
    fn status_line_adds_hints_when_wide() {
        let line = build_status_line("Gasoline", 0, 200);
        assert!(line.contains("Enter: compare"));
        assert!(line.contains("Esc: quit"));
    }
}
