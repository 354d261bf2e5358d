//! Start-up banner: "ACCOUNT DESK" in the standard FIGlet font with a vertical
//! gradient.

use crate::domain::DomainError;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Slate blue (#6a5acd).
const TOP: (u8, u8, u8) = (0x6a, 0x5a, 0xcd);
/// Mint (#3eb489).
const BOTTOM: (u8, u8, u8) = (0x3e, 0xb4, 0x89);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Renders the banner art. Split out so it can be checked without a terminal.
fn banner_art() -> Result<String, DomainError> {
    let font = FIGfont::standard().map_err(DomainError::Render)?;
    let figure = font
        .convert("ACCOUNT DESK")
        .ok_or_else(|| DomainError::Render("figlet could not render banner".into()))?;
    Ok(figure.to_string())
}

/// Prints the banner followed by the crate version.
pub fn print_welcome() -> Result<(), DomainError> {
    let art = banner_art()?;
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);
    let mut out = stdout();

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(TOP, BOTTOM, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(Print(format!("v{}\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.flush();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_match_colors() {
        assert_eq!(lerp_rgb(TOP, BOTTOM, 0.0), TOP);
        assert_eq!(lerp_rgb(TOP, BOTTOM, 1.0), BOTTOM);
    }

    #[test]
    fn banner_renders_multiple_lines() {
        let art = banner_art().unwrap();

        assert!(art.lines().count() > 1);
    }
}
