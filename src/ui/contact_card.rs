//! Left column: static contact details and the link list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::domain::{
    contact_profile::{ContactLink, ContactProfile},
    form_state::{ContactFormState, FocusTarget},
};

use super::styles;

const LINKS_TITLE: &str = "Connect With Me";

pub fn render_contact_card(frame: &mut Frame<'_>, area: Rect, state: &ContactFormState) {
    let links_focused = state.focus() == FocusTarget::Links;

    let card = Block::default()
        .title(Span::styled("Contact Information", styles::card_title_style()))
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let links_height = (state.links().len() as u16).saturating_add(2);
    let [info_area, links_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(links_height)])
        .areas(inner);

    let info = Paragraph::new(build_info_lines(state.profile())).wrap(Wrap { trim: true });
    frame.render_widget(info, info_area);

    let border_style = if links_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };
    let mut list = List::new(build_link_items(state.links())).block(
        Block::default()
            .title(Span::styled(LINKS_TITLE, styles::card_title_style()))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    if links_focused {
        list = list.highlight_style(styles::link_highlight_style());
    }

    let mut list_state = ListState::default();
    list_state.select(state.selected_link_index());
    frame.render_stateful_widget(list, links_area, &mut list_state);
}

fn build_info_lines(profile: &ContactProfile) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(profile.intro.clone(), styles::body_text_style())),
        Line::default(),
    ];

    if !profile.email.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("@ ", styles::link_icon_style()),
            Span::styled(profile.email.clone(), styles::link_text_style()),
        ]));
    }

    if !profile.availability.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("~ ", styles::link_icon_style()),
            Span::styled(profile.availability.clone(), styles::body_text_style()),
        ]));
    }

    lines
}

fn build_link_items(links: &[ContactLink]) -> Vec<ListItem<'static>> {
    links
        .iter()
        .map(|link| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}: ", link.label), styles::link_icon_style()),
                Span::styled(link.display.clone(), styles::link_text_style()),
            ]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn profile() -> ContactProfile {
        ContactProfile {
            heading: "Get In Touch".to_owned(),
            intro: "Say hello".to_owned(),
            email: "owner@example.com".to_owned(),
            availability: "Available for remote work worldwide".to_owned(),
            socials: vec![],
        }
    }

    #[test]
    fn info_lines_show_configured_details() {
        let text: Vec<String> = build_info_lines(&profile()).iter().map(line_text).collect();

        assert_eq!(text[0], "Say hello");
        assert!(text.contains(&"@ owner@example.com".to_owned()));
        assert!(text.contains(&"~ Available for remote work worldwide".to_owned()));
    }

    #[test]
    fn empty_details_are_omitted() {
        let mut profile = profile();
        profile.email.clear();
        profile.availability.clear();

        assert_eq!(build_info_lines(&profile).len(), 2);
    }

    #[test]
    fn link_items_follow_link_order() {
        let links = profile().links();

        assert_eq!(build_link_items(&links).len(), 1);
    }
}
