use crate::story::Story;
use crate::ui::app::App;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_TEXT, HN_ORANGE, INPUT_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub const TITLE: &str = "Hacker Stories";

const HELP: &str = "Enter search  ↑/↓ select  Del remove  Esc quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let view = app.view();
    let [header, search, status, body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(HN_ORANGE).add_modifier(Modifier::BOLD),
        ))),
        header,
    );

    let input = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(app.search_term(), Style::default().fg(HEADER_TEXT)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(INPUT_BORDER)),
    );
    frame.render_widget(input, search);

    frame.render_widget(Paragraph::new(status_line(app.search_term(), &view)), status);

    let items: Vec<ListItem> = view.items().iter().map(story_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::TOP))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(app.selected());
    frame.render_stateful_widget(list, body, &mut list_state);

    frame.render_widget(
        Paragraph::new(Span::styled(HELP, Style::default().fg(MUTED_TEXT))),
        footer,
    );
}

fn status_line(term: &str, view: &crate::ui::stories::StoriesState) -> Line<'static> {
    let mut spans = vec![
        Span::raw("Searching for "),
        Span::styled(
            term.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("."),
    ];

    if view.is_loading() {
        spans.push(Span::styled("  Loading ...", Style::default().fg(STATUS_OK)));
    } else if view.is_error() {
        spans.push(Span::styled(
            "  Something went wrong ...",
            Style::default().fg(STATUS_ERROR),
        ));
    }

    Line::from(spans)
}

fn story_item(story: &Story) -> ListItem<'static> {
    let muted = Style::default().fg(MUTED_TEXT);
    ListItem::new(Line::from(vec![
        Span::styled(
            story.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", story.url), muted),
        Span::raw(format!("  {}", story.author)),
        Span::styled(
            format!(
                "  {} comments  {} points",
                story.comment_count, story.score
            ),
            muted,
        ),
    ]))
}
