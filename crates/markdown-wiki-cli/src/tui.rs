use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_wiki_engine::{Page, PageId, PageStore, parse_str};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

use crate::preview::preview_lines;

pub struct App {
    store: PageStore,
    /// Pages matching `query`, in store order.
    visible: Vec<PageId>,
    list_state: ListState,
    query: String,
    searching: bool,
}

impl App {
    pub fn new(store: PageStore) -> Self {
        let mut app = Self {
            store,
            visible: Vec::new(),
            list_state: ListState::default(),
            query: String::new(),
            searching: false,
        };
        app.refresh_filter();
        app
    }

    fn refresh_filter(&mut self) {
        self.visible = self.store.search(&self.query).iter().map(|p| p.id).collect();
        let selected = if self.visible.is_empty() {
            None
        } else {
            Some(0)
        };
        self.list_state.select(selected);
    }

    fn visible_pages(&self) -> impl Iterator<Item = &Page> {
        self.visible.iter().filter_map(|id| self.store.get(*id))
    }

    fn selected_page(&self) -> Option<&Page> {
        let index = self.list_state.selected()?;
        self.store.get(*self.visible.get(index)?)
    }

    fn next_page(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.visible.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_page(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn start_search(&mut self) {
        self.searching = true;
    }

    fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.refresh_filter();
    }

    fn pop_query(&mut self) {
        self.query.pop();
        self.refresh_filter();
    }

    fn clear_search(&mut self) {
        self.searching = false;
        self.query.clear();
        self.refresh_filter();
    }

    /// Returns false when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.searching {
            match code {
                KeyCode::Esc => self.clear_search(),
                KeyCode::Enter => self.searching = false,
                KeyCode::Backspace => self.pop_query(),
                KeyCode::Char(c) => self.push_query(c),
                KeyCode::Down => self.next_page(),
                KeyCode::Up => self.previous_page(),
                _ => {}
            }
            return true;
        }
        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Down | KeyCode::Char('j') => self.next_page(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_page(),
            KeyCode::Char('/') => self.start_search(),
            KeyCode::Esc => self.clear_search(),
            _ => {}
        }
        true
    }
}

pub fn run(store: PageStore) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Page list panel
    let items: Vec<ListItem> = app
        .visible_pages()
        .map(|page| ListItem::new(Line::from(page.title.clone())))
        .collect();
    let list_title = if app.query.is_empty() && !app.searching {
        "Pages".to_string()
    } else {
        format!("Pages /{}", app.query)
    };
    let pages_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(pages_list, chunks[0], &mut app.list_state);

    // Preview panel, rendered afresh on every draw
    let (title, lines) = match app.selected_page() {
        Some(page) => (
            page.title.clone(),
            preview_lines(&parse_str(&page.body), &app.store),
        ),
        None => (
            "Preview".to_string(),
            vec![Line::from("No page selected")],
        ),
    };
    let preview = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(preview, chunks[1]);

    let help = if app.searching {
        "type to filter | Enter: Done | Esc: Clear"
    } else {
        "q: Quit | ↑/k: Previous | ↓/j: Next | /: Search | Esc: Clear search"
    };
    f.render_widget(Paragraph::new(Line::from(vec![Span::raw(help)])), rows[1]);
}
