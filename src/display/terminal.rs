//! TTY detection and color support logic

use std::io::IsTerminal;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    colors_enabled(
        std::env::var("NO_COLOR").is_ok(),
        std::env::var("CLICOLOR_FORCE").ok().as_deref(),
        std::env::var("CLICOLOR").ok().as_deref(),
        std::io::stdout().is_terminal(),
    )
}

/// NO_COLOR wins, then CLICOLOR_FORCE, then CLICOLOR=0, then the TTY check.
/// See https://no-color.org/ and https://bixense.com/clicolors/.
fn colors_enabled(
    no_color: bool,
    clicolor_force: Option<&str>,
    clicolor: Option<&str>,
    stdout_is_tty: bool,
) -> bool {
    if no_color {
        return false;
    }
    if clicolor_force.is_some_and(|v| v != "0") {
        return true;
    }
    if clicolor == Some("0") {
        return false;
    }
    stdout_is_tty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_disables() {
        assert!(!colors_enabled(true, None, None, true));
    }

    #[test]
    fn test_no_color_overrides_force() {
        assert!(!colors_enabled(true, Some("1"), None, true));
    }

    #[test]
    fn test_clicolor_force_enables_when_piped() {
        assert!(colors_enabled(false, Some("1"), None, false));
        assert!(!colors_enabled(false, Some("0"), None, false));
    }

    #[test]
    fn test_clicolor_zero_disables() {
        assert!(!colors_enabled(false, None, Some("0"), true));
        assert!(colors_enabled(false, None, Some("1"), true));
    }

    #[test]
    fn test_falls_back_to_tty() {
        assert!(colors_enabled(false, None, None, true));
        assert!(!colors_enabled(false, None, None, false));
    }
}
