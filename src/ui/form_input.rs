//! Form field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::field_input_state::FieldInputState;

use super::styles;

/// Renders one bordered input; places the terminal cursor when focused.
pub fn render_field_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input: &FieldInputState,
    placeholder: &str,
    is_focused: bool,
) {
    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let (row, col) = cursor_offset(input);
    let scroll = scroll_offset(row, col, inner_width, inner_height);

    let paragraph = Paragraph::new(build_input_lines(input, placeholder, is_focused))
        .scroll(scroll)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(paragraph, area);

    if is_focused && inner_width > 0 && inner_height > 0 {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(col.saturating_sub(scroll.1));
        let cursor_y = area
            .y
            .saturating_add(1)
            .saturating_add(row.saturating_sub(scroll.0));
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Placeholder when empty and unfocused, otherwise the value line by line.
fn build_input_lines(
    input: &FieldInputState,
    placeholder: &str,
    is_focused: bool,
) -> Vec<Line<'static>> {
    if input.is_empty() && !is_focused {
        return vec![Line::from(Span::styled(
            placeholder.to_owned(),
            styles::input_placeholder_style(),
        ))];
    }

    input
        .text()
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_owned(), styles::input_text_style())))
        .collect()
}

/// Cursor row and display column inside the field.
fn cursor_offset(input: &FieldInputState) -> (u16, u16) {
    let before = input.text_before_cursor();
    let row = before.matches('\n').count();
    let current_line = before.rsplit('\n').next().unwrap_or_default();

    (clamp_u16(row), clamp_u16(current_line.width()))
}

/// Keeps the cursor inside the visible area: (vertical, horizontal).
fn scroll_offset(row: u16, col: u16, inner_width: u16, inner_height: u16) -> (u16, u16) {
    let vertical = if inner_height == 0 {
        0
    } else {
        row.saturating_sub(inner_height - 1)
    };
    let horizontal = if inner_width == 0 {
        0
    } else {
        col.saturating_sub(inner_width - 1)
    };

    (vertical, horizontal)
}

fn clamp_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> FieldInputState {
        let mut state = FieldInputState::multi_line();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn shows_placeholder_when_empty_and_unfocused() {
        let lines = build_input_lines(&FieldInputState::default(), "Your Name", false);

        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "Your Name");
    }

    #[test]
    fn hides_placeholder_when_focused() {
        let lines = build_input_lines(&FieldInputState::default(), "Your Name", true);

        assert_eq!(line_text(&lines[0]), "");
    }

    #[test]
    fn splits_message_into_lines() {
        let lines = build_input_lines(&typed("Hi\nthere"), "Your Message", false);

        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[1]), "there");
    }

    #[test]
    fn cursor_offset_tracks_rows_and_wide_chars() {
        assert_eq!(cursor_offset(&typed("Hi\nthe")), (1, 3));
        assert_eq!(cursor_offset(&typed("日本")), (0, 4));

        let mut state = typed("abc");
        state.move_cursor_home();
        assert_eq!(cursor_offset(&state), (0, 0));
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 5, 10, 1), (0, 0));
        assert_eq!(scroll_offset(0, 12, 10, 1), (0, 3));
        assert_eq!(scroll_offset(6, 0, 10, 4), (3, 0));
        assert_eq!(scroll_offset(3, 3, 0, 0), (0, 0));
    }
}
