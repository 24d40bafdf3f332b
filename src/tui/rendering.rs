use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::{AppLayout, CARD_HEIGHT, CARD_WIDTH, centered_rect, grid_columns, grid_rows};
use crate::models::Controls;
use crate::utils::sanitize_line;
use crate::view::{Card, Content, Display, NO_RESULTS_HINT, NO_RESULTS_TITLE};

const TEXT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const DANGER: Color = Color::Rgb(239, 68, 68);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// Badge colours; a category always maps to the same entry
const BADGE_COLORS: [Color; 6] = [
    Color::Rgb(234, 179, 8),   // Amber
    Color::Rgb(236, 72, 153),  // Pink
    Color::Rgb(59, 130, 246),  // Blue
    Color::Rgb(34, 197, 94),   // Green
    Color::Rgb(168, 85, 247),  // Purple
    Color::Rgb(249, 115, 22),  // Orange
];

/// Render state passed to rendering functions
pub struct RenderState<'a> {
    pub controls: &'a Controls,
    pub focus: Focus,
    pub display: &'a Display,
    pub selected_idx: usize,
    pub category_count: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_controls(frame, &layout, state);
    render_content(frame, layout.cards_area, &state.display.content, state.selected_idx);
    render_status_bar(frame, layout.status_area, state);

    if state.display.loading {
        let area = frame.area();
        render_loading_overlay(frame, area);
    }
}

/// Screen shown while the catalog is being fetched, before any controls exist
pub fn render_loading_screen(frame: &mut Frame, display: &Display) {
    if display.loading {
        let area = frame.area();
        render_loading_overlay(frame, area);
    }
}

/// Stable badge colour for a category label
pub fn badge_color(category: &str) -> Color {
    let hash = category.bytes().fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    BADGE_COLORS[hash % BADGE_COLORS.len()]
}

fn control_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { MUTED };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", title))
}

fn render_controls(frame: &mut Frame, layout: &AppLayout, state: &RenderState) {
    let search_text = if state.controls.search_term.is_empty() {
        Span::styled("Search by name, description or category...", Style::default().fg(MUTED))
    } else {
        Span::raw(state.controls.search_term.as_str())
    };
    let search = Paragraph::new(Line::from(search_text))
        .block(control_block("Search", state.focus == Focus::Search));
    frame.render_widget(search, layout.search_area);

    let category_label = if state.controls.selected_category.is_empty() {
        "All Categories".to_string()
    } else {
        sanitize_line(&state.controls.selected_category)
    };
    let category = Paragraph::new(format!("◀ {} ▶", category_label)).block(control_block(
        &format!("Category ({})", state.category_count),
        state.focus == Focus::Category,
    ));
    frame.render_widget(category, layout.category_area);

    let sort = Paragraph::new(format!("◀ {} ▶", state.controls.sort_order.label()))
        .block(control_block("Sort", state.focus == Focus::Sort));
    frame.render_widget(sort, layout.sort_area);
}

fn render_content(frame: &mut Frame, area: Rect, content: &Content, selected_idx: usize) {
    match content {
        Content::Empty => {}
        Content::Cards(cards) => render_card_grid(frame, area, cards, selected_idx),
        Content::NoResults => render_no_results(frame, area),
        Content::Progress => render_progress(frame, area),
        Content::Error(message) => render_error_alert(frame, area, message),
    }
}

fn render_card_grid(frame: &mut Frame, area: Rect, cards: &[Card], selected_idx: usize) {
    let columns = grid_columns(area.width);
    let rows = grid_rows(area.height);

    // Scroll by whole rows so the selected card stays visible
    let selected_row = selected_idx / columns;
    let first_row = selected_row.saturating_sub(rows - 1);
    let first_idx = first_row * columns;

    for (offset, card) in cards.iter().skip(first_idx).take(rows * columns).enumerate() {
        let row = (offset / columns) as u16;
        let column = (offset % columns) as u16;
        let card_area = Rect::new(
            area.x + column * CARD_WIDTH,
            area.y + row * CARD_HEIGHT,
            CARD_WIDTH.min(area.width),
            CARD_HEIGHT.min(area.height),
        )
        .intersection(area);

        render_card(frame, card_area, card, first_idx + offset == selected_idx);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card, selected: bool) {
    let border_style = if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };

    let mut lines = vec![
        Line::from(card.glyph.as_str()).alignment(Alignment::Center),
        Line::from(Span::styled(
            format!(" {} ", card.category),
            Style::default().fg(STATUS_BG).bg(badge_color(&card.category)),
        )),
        Line::from(Span::styled(
            card.name.as_str(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        card.description
            .lines()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(MUTED)))),
    );

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_no_results(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from("🔍"),
        Line::from(Span::styled(NO_RESULTS_TITLE, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(NO_RESULTS_HINT, Style::default().fg(MUTED))),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, centered_rect(area.width, 3, area));
}

fn render_progress(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Span::styled("⠋ Filtering...", Style::default().fg(ACCENT)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, centered_rect(area.width, 1, area));
}

fn render_error_alert(frame: &mut Frame, area: Rect, message: &str) {
    let text = Line::from(vec![
        Span::styled("Error: ", Style::default().fg(DANGER).add_modifier(Modifier::BOLD)),
        Span::raw(message),
    ]);
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DANGER))
                .title(" Alert "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_loading_overlay(frame: &mut Frame, area: Rect) {
    let overlay_area = centered_rect(36, 5, area);
    let paragraph = Paragraph::new(Text::from(vec![
        Line::from(""),
        Line::from(Span::styled("⠋ Loading emoji catalog...", Style::default().fg(ACCENT))),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)));

    frame.render_widget(Clear, overlay_area);
    frame.render_widget(paragraph, overlay_area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(msg) = state.status_message {
        let fg = match msg.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => DANGER,
        };
        (format!(" {} ", msg.text), Style::default().fg(fg).bg(STATUS_BG))
    } else if matches!(state.display.content, Content::Error(_)) {
        (" Ctrl+C: quit ".to_string(), Style::default().fg(TEXT).bg(STATUS_BG))
    } else {
        let mut parts = vec![];

        if !state.display.results_count.is_empty() {
            parts.push(state.display.results_count.clone());
        }

        // Keybindings
        parts.push("Tab: switch control".to_string());
        parts.push("←/→: change".to_string());
        parts.push("Ctrl+Y: copy".to_string());
        if !state.controls.is_default() {
            parts.push("Ctrl+X: clear filters".to_string());
        }
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(TEXT).bg(STATUS_BG))
    };

    let paragraph = Paragraph::new(status_text).style(style);

    frame.render_widget(paragraph, area);
}
