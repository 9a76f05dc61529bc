/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Currency coloring for KPI output:
/// \>0 → yellow (costa dinheiro), 0 → grey.
pub fn color_for_custo(valor: f64) -> &'static str {
    if valor > 0.0 { YELLOW } else { GREY }
}

/// Grey out empty/placeholder cells ("", "--", "R$ 0,00").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "R$ 0,00" || v == "0:00h" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
