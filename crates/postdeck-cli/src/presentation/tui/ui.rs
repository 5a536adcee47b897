use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use super::app::{CreateField, EditField, Focus, TuiState};
use crate::presentation::presenters::format_relative_time;

pub(crate) fn draw(f: &mut Frame, state: &mut TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], state);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    draw_list(f, panes[0], state);
    draw_detail(f, panes[1], state);
    draw_footer(f, chunks[2], state);

    if state.board.confirm_delete.is_some() {
        draw_confirm_modal(f, state);
    } else if matches!(state.focus, Focus::Edit(_)) {
        draw_edit_form(f, state);
    } else if matches!(state.focus, Focus::Create(_)) {
        draw_create_form(f, state);
    }
}

fn draw_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let refreshed = state
        .board
        .refreshed_at
        .as_deref()
        .map(|ts| format!("refreshed {}", format_relative_time(ts)))
        .unwrap_or_else(|| "loading...".to_string());

    let header = Line::from(vec![
        Span::styled(" postdeck ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(&state.board.api_url),
        Span::raw("  "),
        Span::styled(refreshed, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_list(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let items: Vec<ListItem> = state
        .board
        .rows
        .iter()
        .map(|row| {
            let style = if row.active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(row.title.clone(), style),
                Span::styled(
                    format!(" — {}", row.author),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Posts"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");

    if state.board.rows.is_empty() {
        state.list_state.select(None);
    } else {
        state.list_state.select(Some(state.cursor));
    }
    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn draw_detail(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default().borders(Borders::ALL).title("Post");

    let paragraph = match &state.board.detail {
        Some(detail) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    detail.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("By {}", detail.author),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )),
                Line::from(""),
            ];
            lines.extend(detail.content.lines().map(|l| Line::from(l.to_string())));
            Paragraph::new(lines).wrap(Wrap { trim: false })
        }
        None => Paragraph::new(Line::from(Span::styled(
            state.board.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
    };

    f.render_widget(paragraph.block(block), area);
}

fn draw_footer(f: &mut Frame, area: Rect, state: &TuiState) {
    let hints = match state.focus {
        Focus::List => " enter view · e edit · d delete · n new · r reload · q quit",
        Focus::Edit(_) => " enter save · tab switch field · esc cancel",
        Focus::Create(_) => " enter create · tab switch field · esc back",
        Focus::Confirm => " y delete · n keep",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

fn draw_edit_form(f: &mut Frame, state: &TuiState) {
    let area = centered_rect(60, 9, f.area());
    f.render_widget(Clear, area);

    let title = state
        .board
        .edit_form
        .as_ref()
        .map(|form| format!("Edit post {}", form.id))
        .unwrap_or_else(|| "Edit post".to_string());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(inner);

    draw_input(
        f,
        fields[0],
        "Title",
        &state.edit_title,
        state.focus == Focus::Edit(EditField::Title),
    );
    draw_input(
        f,
        fields[1],
        "Content",
        &state.edit_content,
        state.focus == Focus::Edit(EditField::Content),
    );
}

fn draw_create_form(f: &mut Frame, state: &TuiState) {
    let area = centered_rect(60, 12, f.area());
    f.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title("New post");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(inner);

    draw_input(
        f,
        fields[0],
        "Title",
        &state.create_title,
        state.focus == Focus::Create(CreateField::Title),
    );
    draw_input(
        f,
        fields[1],
        "Author",
        &state.create_author,
        state.focus == Focus::Create(CreateField::Author),
    );
    draw_input(
        f,
        fields[2],
        "Content",
        &state.create_content,
        state.focus == Focus::Create(CreateField::Content),
    );
}

fn draw_confirm_modal(f: &mut Frame, state: &TuiState) {
    let Some(confirm) = &state.board.confirm_delete else {
        return;
    };

    let area = centered_rect(50, 5, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Delete post")
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(format!("Are you sure you want to delete \"{}\"?", confirm.title)),
        Line::from(Span::styled(
            "[y] delete   [n] keep",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_input(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let shown = if focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };
    f.render_widget(
        Paragraph::new(shown).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(border_style),
        ),
        area,
    );
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
