use colored::*;
use console::measure_text_width;
use tracing::info;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 10;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Writes a line as-is, routed through tracing so it never tears the progress bar.
pub fn print(msg: &str) {
    info!(target: "sonar::print", "{msg}");
}

/// `──────⟦ TITLE ⟧──────`, hidden in quiet mode.
pub fn header(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", title.to_uppercase());
    let pad: usize = TOTAL_WIDTH.saturating_sub(measure_text_width(&title));
    let rule = |n: usize| "─".repeat(n).color(colors::SEPARATOR);

    print(&format!(
        "{}{}{}",
        rule(pad / 2),
        title.color(colors::PRIMARY),
        rule(pad - pad / 2)
    ));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `> Key.......: value`
pub fn aligned_line(key: &str, value: impl Into<ColoredString>) {
    let dots: usize = (KEY_WIDTH + 1).saturating_sub(key.chars().count());
    let leader: ColoredString = format!("{}:", ".".repeat(dots)).color(colors::SEPARATOR);
    print(&format!(
        "{} {}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        leader,
        value.into()
    ));
}

pub fn centerln(msg: &str) {
    let indent: usize = TOTAL_WIDTH.saturating_sub(measure_text_width(msg)) / 2;
    print(&format!("{}{msg}", " ".repeat(indent)));
}

const SILENCE: &str = r#"
            .  .  .     no echo came back     .  .  .
                 ___ ___ _    ___ _  _  ___ ___
                / __|_ _| |  | __| \| |/ __| __|
                \__ \| || |__| _|| .` | (__| _|
                |___/___|____|___|_|\_|\___|___|
"#;

pub fn no_results() {
    print(&SILENCE.red().bold().to_string());
}

pub fn end_of_program() {
    fat_separator();
}
