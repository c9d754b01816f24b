//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Portfolio accent green.
pub const ACCENT: Color = Color::Rgb(0x9c, 0xcc, 0x3d);

// =============================================================================
// Section and card styles
// =============================================================================

/// Style for the "Get In Touch" section title.
pub fn section_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn card_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Body copy inside the cards (intro, availability).
pub fn body_text_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn active_panel_border_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Contact link styles
// =============================================================================

pub fn link_icon_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn link_text_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Highlight for the selected link while the link list has focus.
pub fn link_highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

// =============================================================================
// Form styles
// =============================================================================

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Send button; dimmed while a submission is in flight.
pub fn button_style(enabled: bool, focused: bool) -> Style {
    if !enabled {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::DIM);
    }

    let style = Style::default().fg(Color::Black).bg(ACCENT);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

pub fn success_message_style() -> Style {
    Style::default().fg(ACCENT)
}

// =============================================================================
// Status bar styles
// =============================================================================

pub fn status_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn status_info_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn status_warning_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
