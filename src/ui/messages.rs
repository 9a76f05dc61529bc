use crate::utils::colors::{BLUE, BOLD, CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header used between report blocks.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}====================== {}{}", CYAN, BOLD, msg, RESET);
}

/// KPI line: dimmed label, bold value.
pub fn metric<T: fmt::Display>(label: &str, value: T) {
    println!("  {}{:<32}{} {}{}{}", CYAN, label, RESET, BOLD, value, RESET);
}

/// Destaque do custo total (o "cartão azul" do painel original).
pub fn banner(title: &str, value: &str) {
    let width = 46;
    println!();
    println!("{}{}{}{}", BLUE, BOLD, "=".repeat(width), RESET);
    println!("{}{}{:^width$}{}", BLUE, BOLD, title, RESET, width = width);
    println!("{}{}{:^width$}{}", BLUE, BOLD, value, RESET, width = width);
    println!("{}{}{}{}", BLUE, BOLD, "=".repeat(width), RESET);
}
