use lipgloss::{rounded_border, Color, Style};
use once_cell::sync::Lazy;

// The accelerator highlight is the only saturated colour on screen.
pub static STYLE_ACE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(255, 175, 0))
        .bold(true)
        .underline(true)
});
pub static STYLE_CURRENT: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(95, 175, 255)));
pub static STYLE_LABEL: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(208, 208, 208)));
pub static STYLE_DESC: Lazy<Style> = Lazy::new(|| Style::new().faint(true));

pub static STYLE_STATUS: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(135, 215, 135)));
pub static STYLE_STATUS_BOX: Lazy<Style> =
    Lazy::new(|| Style::new().border(rounded_border()).padding(0, 1, 0, 1));

// modeline: one padded outer style, unpadded pieces inside it
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(48, 48, 48))
        .foreground(Color::from_rgb(220, 220, 220))
        .padding(0, 1, 0, 1)
});
pub static STYLE_MODELINE_TEXT: Lazy<Style> =
    Lazy::new(|| STYLE_MODELINE.clone().padding(0, 0, 0, 0));
pub static STYLE_MODELINE_KEY: Lazy<Style> = Lazy::new(|| {
    STYLE_MODELINE_TEXT
        .clone()
        .foreground(Color::from_rgb(255, 175, 0))
        .bold(true)
});
pub static STYLE_MODELINE_MODE: Lazy<Style> =
    Lazy::new(|| STYLE_MODELINE_TEXT.clone().reverse(true).bold(true));
