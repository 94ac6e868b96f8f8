use super::content::{status_text, NAV_LEGEND, TITLE};
use crate::app::App;
use crate::widgets::{
    fit_name, selection_marker, separator_rule, status_color, status_symbol, CheckboxState,
    NAME_WIDTH,
};
use bench_core::{Entry, Section};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Header | Columns | Status
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(NAV_LEGEND, Style::default().fg(Color::White))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, main_chunks[0]);

    if app.is_loading() {
        let loading = Paragraph::new(super::LOADING_MESSAGE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(loading, main_chunks[1]);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                [
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                ]
                .as_ref(),
            )
            .split(main_chunks[1]);
        for (section, area) in Section::ALL.into_iter().zip(columns.iter()) {
            draw_column(f, app, section, *area);
        }
    }

    let status_style = if app.load_error().is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Magenta)
    };
    let status = Paragraph::new(Span::styled(status_text(app), status_style))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, main_chunks[2]);
}

fn draw_column(f: &mut Frame, app: &App, section: Section, area: Rect) {
    let selection = app.selection();
    let active = selection.section == section;
    let border = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let rule_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .sections()
        .entries(section)
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if entry.is_separator {
                ListItem::new(Line::from(Span::styled(
                    separator_rule(rule_width),
                    Style::default().fg(Color::DarkGray),
                )))
            } else {
                ListItem::new(entry_line(entry, active && selection.index == index))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(section.title()),
    );
    // Keeps the focused row scrolled into view.
    let mut state = ListState::default().with_selected(active.then_some(selection.index));
    f.render_stateful_widget(list, area, &mut state);
}

fn entry_line(entry: &Entry, focused: bool) -> Line<'static> {
    let checkbox = CheckboxState::of(entry);
    let name_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(
            selection_marker(focused),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(checkbox.symbol(), Style::default().fg(checkbox.color())),
        Span::raw(" "),
        Span::styled(
            status_symbol(entry.status),
            Style::default().fg(status_color(entry.status)),
        ),
        Span::raw(" "),
        Span::styled(fit_name(&entry.name, NAME_WIDTH), name_style),
    ])
}
