//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::session::{Identity, Role};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Format a role as a colored string
pub fn format_role(role: Role) -> String {
    match role {
        Role::Admin => role.to_string().red().to_string(),
        Role::User => role.to_string().green().to_string(),
    }
}

/// Print an identity as a table
pub fn print_identity_table(identity: &Identity) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Field").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);

    let role = identity.role.to_string();
    let name = identity.display_name().unwrap_or_else(|| "-".to_string());
    let expires = identity
        .exp
        .and_then(|exp| chrono::DateTime::from_timestamp(exp, 0))
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "-".to_string());

    table.add_row(vec!["Id", identity.id.as_str()]);
    table.add_row(vec!["Role", role.as_str()]);
    table.add_row(vec!["Email", identity.email.as_deref().unwrap_or("-")]);
    table.add_row(vec!["Name", name.as_str()]);
    table.add_row(vec!["Avatar", identity.image_url.as_deref().unwrap_or("-")]);
    table.add_row(vec!["Expires", expires.as_str()]);

    println!("{table}");
}
