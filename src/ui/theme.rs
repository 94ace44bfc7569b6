use ratatui::style::Color;

/// Palette used by rendering code.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Canvas background.
    pub base: Color,
    /// Darkest shade, used as text on highlighted rows.
    pub crust: Color,
    /// Border color.
    pub surface2: Color,
    /// Muted text and inactive controls.
    pub overlay1: Color,
    /// Primary foreground text.
    pub text: Color,
    /// Secondary text (excerpts).
    pub subtext0: Color,
    /// Links.
    pub sapphire: Color,
    /// Titles and headings.
    pub mauve: Color,
    /// Busy indicator.
    pub yellow: Color,
    /// Errors.
    pub red: Color,
    /// Selection and active tabs.
    pub lavender: Color,
}

/// Catppuccin Mocha.
const MOCHA: Theme = Theme {
    base: Color::Rgb(30, 30, 46),        // #1e1e2e
    crust: Color::Rgb(17, 17, 27),       // #11111b
    surface2: Color::Rgb(88, 91, 112),   // #585b70
    overlay1: Color::Rgb(127, 132, 156), // #7f849c
    text: Color::Rgb(205, 214, 244),     // #cdd6f4
    subtext0: Color::Rgb(166, 173, 200), // #a6adc8
    sapphire: Color::Rgb(116, 199, 236), // #74c7ec
    mauve: Color::Rgb(203, 166, 247),    // #cba6f7
    yellow: Color::Rgb(249, 226, 175),   // #f9e2af
    red: Color::Rgb(243, 139, 168),      // #f38ba8
    lavender: Color::Rgb(180, 190, 254), // #b4befe
};

/// Active theme.
#[must_use]
pub const fn theme() -> Theme {
    MOCHA
}
