//! Styled tables and status lines for prime listings and config edits

use super::context::UiContext;
use console::style;

/// Column layout for a results table
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

impl Column {
    pub const fn new(title: &'static str, width: usize) -> Self {
        Self { title, width }
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Title above a listing, e.g. "First 10 primes"
pub fn heading(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        cliclack::intro(style(title).cyan().bold()).ok();
    } else {
        println!("{}", style(title).cyan().bold());
        println!();
    }
}

/// Column titles followed by a rule as wide as the table
pub fn table_header(columns: &[Column]) {
    let titles: Vec<String> = columns
        .iter()
        .map(|c| style(pad(c.title, c.width)).bold().to_string())
        .collect();
    println!("{}", titles.join(" ").trim_end());

    let width: usize = columns.iter().map(|c| c.width).sum::<usize>() + columns.len() - 1;
    println!("{}", "-".repeat(width));
}

/// One table row; cells are padded before styling so columns line up
pub fn table_row(columns: &[Column], cells: &[String]) {
    let row: Vec<String> = columns
        .iter()
        .zip(cells)
        .map(|(c, cell)| pad(cell, c.width))
        .collect();
    println!("{}", row.join(" ").trim_end());
}

/// Primality verdict cell, green when prime
pub fn verdict(prime: bool) -> String {
    if prime {
        style("yes").green().to_string()
    } else {
        style("no").dim().to_string()
    }
}

/// Closing totals line under a table
pub fn summary(ctx: &UiContext, message: &str) {
    println!();
    if ctx.use_fancy_output() {
        cliclack::outro(style(message).dim()).ok();
    } else {
        println!("{}", message);
    }
}

/// Config file written, with its location
pub fn config_written(ctx: &UiContext, message: &str, path: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::success(format!("{} ({})", message, style(path).dim())).ok();
    } else {
        println!("  {} {} ({})", style("[OK]").green(), message, path);
    }
}

/// Config file left untouched, with how to override
pub fn config_kept(ctx: &UiContext, path: &str) {
    let message = format!("Config already exists at {}", path);
    if ctx.use_fancy_output() {
        cliclack::log::warning(format!("{} - {}", message, style("Use --force to overwrite").dim()))
            .ok();
    } else {
        println!("  {} {} - Use --force to overwrite", style("[WARN]").yellow(), message);
    }
}

/// Unknown `config set` key, followed by the keys that are accepted
pub fn unknown_config_key(ctx: &UiContext, key: &str, valid: &[&str]) {
    if ctx.use_fancy_output() {
        cliclack::log::error(format!("Unknown config key: {}", style(key).red())).ok();
        cliclack::log::remark(format!("Valid keys: {}", valid.join(", "))).ok();
    } else {
        println!("  {} Unknown config key: {}", style("[FAIL]").red(), key);
        for key in valid {
            println!("    {}", style(key).dim());
        }
    }
}
