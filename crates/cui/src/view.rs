use crate::app::App;
use crate::layout;
use patience_core::{Card, PileId, Selection, SuitColor};
use ratatui::layout::Rect;
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    draw_header(frame, app);
    for col in 0..7 {
        draw_column(frame, app, col);
    }
    for index in 0..4 {
        draw_foundation(frame, app, index);
    }
    draw_stock(frame, app);
    draw_exposed(frame, app);
    draw_log(frame, app);
    if app.game.is_won() {
        draw_win_banner(frame);
    }
    if app.show_help {
        draw_help_popup(frame);
    }
}

fn clipped(frame: &Frame, rect: Rect) -> Rect {
    rect.intersection(frame.area())
}

fn card_text(card: Card) -> String {
    format!("{:>2}{}", card.rank.face(), card.suit.glyph())
}

fn card_style(card: Card) -> Style {
    match card.color() {
        SuitColor::Red => Style::default().fg(Color::Red),
        SuitColor::Black => Style::default().fg(Color::White),
    }
}

fn draw_header(frame: &mut Frame, app: &App) {
    let area = clipped(frame, Rect::new(0, 0, frame.area().width, 2));
    let title = format!("patience | seed {}", app.game.seed());
    let lines = vec![
        Line::from(title.bold()),
        Line::from(app.status_line.clone()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_column(frame: &mut Frame, app: &App, col: usize) {
    let held_from = match app.game.selection() {
        Selection::Holding(held) if held.source == PileId::Tableau(col as u8) => {
            Some(held.start)
        }
        _ => None,
    };
    let mut lines = Vec::new();
    for (depth, id) in app.game.tableau(col).cards().iter().enumerate() {
        let slot = app.game.card(*id);
        let line = if slot.face_up {
            let mut style = card_style(slot.card);
            if held_from.is_some_and(|start| depth >= start) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(card_text(slot.card)).style(style)
        } else {
            Line::from(" ░░░").style(Style::default().fg(Color::DarkGray))
        };
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(Line::from(" ···").style(Style::default().fg(Color::DarkGray)));
    }
    let area = clipped(frame, layout::column_rect(col));
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_cell(frame: &mut Frame, rect: Rect, title: &str, line: Line) {
    let area = clipped(frame, rect);
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(vec![line]).block(block), area);
}

fn draw_foundation(frame: &mut Frame, app: &App, index: usize) {
    let line = match app.game.foundation(index).top() {
        Some(id) => {
            let card = app.game.card(id).card;
            Line::from(card_text(card)).style(card_style(card))
        }
        None => Line::from(" --").style(Style::default().fg(Color::DarkGray)),
    };
    draw_cell(frame, layout::foundation_rect(index), "fnd", line);
}

fn draw_stock(frame: &mut Frame, app: &App) {
    let remaining = app.game.draw().len();
    let line = if app.game.draw().is_exhausted() {
        Line::from("   ").style(Style::default().fg(Color::DarkGray))
    } else {
        Line::from(format!("{remaining:>3}")).style(Style::default().fg(Color::Cyan))
    };
    draw_cell(frame, layout::stock_rect(), "pile", line);
}

fn draw_exposed(frame: &mut Frame, app: &App) {
    let line = match app.game.draw().exposed() {
        Some(id) => {
            let card = app.game.card(id).card;
            let mut style = card_style(card);
            if matches!(
                app.game.selection(),
                Selection::Holding(held) if held.source == PileId::Draw
            ) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(card_text(card)).style(style)
        }
        None => Line::from(" --").style(Style::default().fg(Color::DarkGray)),
    };
    draw_cell(frame, layout::exposed_rect(), "draw", line);
}

fn draw_log(frame: &mut Frame, app: &App) {
    let full = frame.area();
    if full.height <= layout::LOG_Y || full.width <= layout::SIDE_X0 {
        return;
    }
    let area = Rect::new(
        layout::SIDE_X0,
        layout::LOG_Y,
        full.width - layout::SIDE_X0,
        full.height - layout::LOG_Y,
    );
    let lines: Vec<Line> = app
        .event_log
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| Line::from(entry.as_str()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("log");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered(frame: &Frame, width: u16, height: u16) -> Rect {
    let full = frame.area();
    let x = full.width.saturating_sub(width) / 2;
    let y = full.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(full.width), height.min(full.height))
}

fn draw_win_banner(frame: &mut Frame) {
    let area = centered(frame, 44, 5);
    let block = Block::default().borders(Borders::ALL).title("won");
    let text = Paragraph::new(vec![
        Line::from("congratulations, you won!".bold()),
        Line::from("press n for a new deal, q to quit"),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(Clear, area);
    frame.render_widget(text, area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered(frame, 52, 10);
    let block = Block::default().borders(Borders::ALL).title("help");
    let text = Paragraph::new(vec![
        Line::from("click a face-up card to pick it up, then"),
        Line::from("click a column or foundation to drop it"),
        Line::from("click a face-down top card to flip it"),
        Line::from("click the pile cell to browse the draw pile"),
        Line::from("double-click sends a card to a foundation"),
        Line::from(""),
        Line::from("n: new deal   q: quit   ?: close help"),
    ])
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(Clear, area);
    frame.render_widget(text, area);
}
