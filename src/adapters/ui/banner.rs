//! Start-up banner (FIT-PLANNER) with a vertical colour gradient.
//! Uses figlet's bundled standard font; falls back to plain text if it cannot load.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Energy Orange (#ff7a18).
const ENERGY_ORANGE: (u8, u8, u8) = (0xff, 0x7a, 0x18);
/// Fresh Green (#2ecc71).
const FRESH_GREEN: (u8, u8, u8) = (0x2e, 0xcc, 0x71);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn banner_art(text: &str) -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|figure| figure.to_string()))
        .unwrap_or_else(|| text.to_string())
}

/// Prints "FIT-PLANNER" in ASCII art with an orange-to-green gradient, then the version.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art("FIT-PLANNER");
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(ENERGY_ORANGE, FRESH_GREEN, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: FRESH_GREEN.0,
        g: FRESH_GREEN.1,
        b: FRESH_GREEN.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Personalized Workout & Diet Planner\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
