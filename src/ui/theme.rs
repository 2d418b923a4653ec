use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub heading: Color,
    pub complexity: Color, // Cyan for big-O bounds
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue: idle bars
    secondary: Color::Rgb(250, 179, 135), // Orange: bars changed this step
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161), // Green: found / finalized
    error: Color::Rgb(243, 139, 168),   // Red: search probe
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    heading: Color::Rgb(249, 226, 175),
    complexity: Color::Rgb(148, 226, 213),
};
