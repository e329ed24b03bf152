use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::print::{self, TOTAL_WIDTH};

const BANNER_0: &str = r#"
          ___  ___  _ __   __ _ _ __
         / __|/ _ \| '_ \ / _` | '__|
         \__ \ (_) | | | | (_| | |
         |___/\___/|_| |_|\__,_|_|
"#;

const BANNER_1: &str = r#"
        ((( ·  )))       s o n a r
       ((  ·  ·  ))      ping the last octet,
        ((( ·  )))       listen for the echo
"#;

const BANNER_2: &str = r#"
       ____ ____ _  _ ____ ____
       [__  |  | |\ | |__| |__/
       ___] |__| | \| |  | |  \
"#;

const BANNERS: &[&str] = &[BANNER_0, BANNER_1, BANNER_2];

pub fn print(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ SONAR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    print::print(&format!("{}{}{}", sep, text, sep));

    let idx: usize = rand::random_range(0..BANNERS.len());
    let art: ColoredString = match idx {
        0 => BANNERS[idx].cyan(),
        1 => BANNERS[idx].truecolor(80, 160, 200),
        _ => BANNERS[idx].blue(),
    };
    print::print(&format!("{}", art));
}
