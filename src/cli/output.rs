//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically. This is the
//! render boundary: the only place palette tags resolve to actual styles.

use colored::{Color, Colorize};

use crate::color::NodeColor;
use crate::visible::VisibleNode;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print one row of the visible listing, depth-indented.
pub fn row(row: &VisibleNode) {
    let indent = "  ".repeat(row.depth);
    let marker = if row.has_children {
        if row.expanded {
            "▼"
        } else {
            "▶"
        }
    } else {
        "·"
    };
    let tag = match row.color {
        Some(color) => format!(" {}", color.to_string().color(style(color))),
        None => String::new(),
    };
    println!(
        "{}{} {}{} {}",
        indent,
        marker,
        row.title,
        tag,
        format!("[{}]", row.id).dimmed()
    );
}

/// Terminal style for a palette tag.
fn style(color: NodeColor) -> Color {
    match color {
        NodeColor::Red => Color::Red,
        NodeColor::Orange => Color::BrightYellow,
        NodeColor::Yellow => Color::Yellow,
        NodeColor::Green => Color::Green,
        NodeColor::Blue => Color::Blue,
        NodeColor::Purple => Color::Magenta,
        NodeColor::Gray => Color::BrightBlack,
    }
}
