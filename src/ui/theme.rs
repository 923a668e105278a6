use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color,   // Grey, line numbers and hints
    pub keyword: Color,   // Blue
    pub string: Color,    // Orange
    pub number: Color,    // Orange
    pub bracket: Color,   // Blue, delimiters
    pub unknown: Color,   // Red, fallback tokens
    pub structural: Color, // Teal, block/condition/expression nodes
    pub border_focused: Color,
    pub border_normal: Color,
    pub selection_bg: Color,
    pub current_line_bg: Color,
    pub accent: Color, // Yellow, status highlights
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    keyword: Color::Rgb(137, 180, 250),
    string: Color::Rgb(250, 179, 135),
    number: Color::Rgb(250, 179, 135),
    bracket: Color::Rgb(137, 180, 250),
    unknown: Color::Rgb(243, 139, 168),
    structural: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    selection_bg: Color::Rgb(69, 71, 90),
    current_line_bg: Color::Rgb(50, 50, 70),
    accent: Color::Rgb(249, 226, 175),
};
