use ratatui::style::Color;

pub struct Theme {
    pub border_focus: Color,
    pub border_inactive: Color,
    pub title: Color,
    pub ethanol: Color,
    pub gasoline: Color,
    pub error: Color,
    pub hint: Color,
}

pub const THEME: Theme = Theme {
    border_focus: Color::Cyan,
    border_inactive: Color::DarkGray,
    title: Color::Yellow,
    ethanol: Color::Green,
    gasoline: Color::Red,
    error: Color::Yellow,
    hint: Color::DarkGray,
};
