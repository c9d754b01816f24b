use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{
    draft_message::FormField,
    form_state::{ContactFormState, FocusTarget, NoticeKind},
};

use super::{contact_card::render_contact_card, form_input::render_field_input, styles};

const FORM_TITLE: &str = "Send Me a Message";
const SEND_LABEL: &str = "Send Message";
const SENDING_LABEL: &str = "Sending...";
const SUCCESS_TEXT: &str = "Message sent successfully! I'll get back to you soon.";

pub fn render(frame: &mut Frame<'_>, state: &ContactFormState) {
    let [title_area, content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let title = Paragraph::new(Span::styled(
        state.profile().heading.clone(),
        styles::section_title_style(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let [info_area, form_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(content_area);

    render_contact_card(frame, info_area, state);
    render_form_card(frame, form_area, state);

    frame.render_widget(Paragraph::new(status_line(state)), status_area);
}

fn render_form_card(frame: &mut Frame<'_>, area: Rect, state: &ContactFormState) {
    let card = Block::default()
        .title(Span::styled(FORM_TITLE, styles::card_title_style()))
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());
    let inner = card.inner(area);
    frame.render_widget(card, area);

    // Each single-line input takes 3 rows: border, text, border.
    let [name_area, email_area, message_area, button_area, _, success_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    let draft = state.draft();
    for (field, field_area) in [
        (FormField::Name, name_area),
        (FormField::Email, email_area),
        (FormField::Message, message_area),
    ] {
        render_field_input(
            frame,
            field_area,
            draft.field(field),
            field.placeholder(),
            state.focus() == FocusTarget::Field(field),
        );
    }

    let button = Paragraph::new(button_label(state))
        .alignment(Alignment::Center)
        .style(styles::button_style(
            state.can_submit(),
            state.focus() == FocusTarget::SendButton,
        ));
    frame.render_widget(button, button_area);

    if state.status().is_succeeded() {
        let success = Paragraph::new(Span::styled(SUCCESS_TEXT, styles::success_message_style()))
            .alignment(Alignment::Center);
        frame.render_widget(success, success_area);
    }
}

fn button_label(state: &ContactFormState) -> &'static str {
    if state.status().is_submitting() {
        SENDING_LABEL
    } else {
        SEND_LABEL
    }
}

fn status_line(state: &ContactFormState) -> Line<'static> {
    if let Some(notice) = state.notice() {
        let style = match notice.kind {
            NoticeKind::Info => styles::status_info_style(),
            NoticeKind::Warning => styles::status_warning_style(),
        };
        return Line::from(Span::styled(notice.text.clone(), style));
    }

    let hints = match state.focus() {
        FocusTarget::Field(FormField::Message) => {
            "Tab next | Enter newline | Ctrl+S send | Esc quit"
        }
        FocusTarget::Field(_) => "Tab/Enter next | Shift+Tab back | Ctrl+S send | Esc quit",
        FocusTarget::SendButton => "Enter send | Tab next | Esc quit",
        FocusTarget::Links => "j/k select | Enter open | y copy | Tab next | Esc quit",
    };

    Line::from(Span::styled(hints, styles::status_hint_style()))
}
