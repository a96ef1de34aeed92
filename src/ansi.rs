pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_CYAN: &str = "\x1b[36m";

/// Wrap `text` in the given SGR sequence. Returns the text untouched when colour is off.
pub fn paint(enabled: bool, sgr: &str, text: &str) -> String {
    if !enabled || text.is_empty() {
        return text.to_string();
    }
    format!("{sgr}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_respects_toggle() {
        assert_eq!(paint(false, FG_RED, "oops"), "oops");
        assert_eq!(paint(true, FG_RED, "oops"), "\x1b[31moops\x1b[0m");
        assert_eq!(paint(true, FG_RED, ""), "");
    }
}
