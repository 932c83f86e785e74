use crate::kernel::services::ports::ThemeSettings;
use crate::ui::core::style::Color;

/// Colours used by the views. Kept free of backend colour types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub scrim_bg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub dialog_border: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub success_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Theme {
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&Option<String>, &mut Color); 11] = [
            (&settings.scrim_bg, &mut self.scrim_bg),
            (&settings.dialog_bg, &mut self.dialog_bg),
            (&settings.dialog_fg, &mut self.dialog_fg),
            (&settings.dialog_border, &mut self.dialog_border),
            (&settings.accent_fg, &mut self.accent_fg),
            (&settings.header_fg, &mut self.header_fg),
            (&settings.muted_fg, &mut self.muted_fg),
            (&settings.error_fg, &mut self.error_fg),
            (&settings.success_fg, &mut self.success_fg),
            (&settings.selected_bg, &mut self.selected_bg),
            (&settings.selected_fg, &mut self.selected_fg),
        ];
        for (value, slot) in slots {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value = %value, "ignoring unknown theme color"),
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            scrim_bg: Color::Indexed(236),     // Near-black grey
            dialog_bg: Color::Indexed(0),      // Black
            dialog_fg: Color::Indexed(15),     // White
            dialog_border: Color::Indexed(6),  // Cyan
            accent_fg: Color::Indexed(3),      // Yellow
            header_fg: Color::Indexed(6),      // Cyan
            muted_fg: Color::Indexed(8),       // DarkGray
            error_fg: Color::Indexed(1),       // Red
            success_fg: Color::Indexed(2),     // Green
            selected_bg: Color::Indexed(8),    // DarkGray
            selected_fg: Color::Indexed(15),   // White
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        _ => return v.parse::<u8>().ok().map(Color::Indexed),
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/theme.rs"]
mod tests;
