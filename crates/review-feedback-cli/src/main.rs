mod view;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use review_feedback_config::Config;
use review_feedback_engine::{
    Block as FeedbackBlock, ProjectFile, bundle, collect_project_files, project, render,
    render_html,
};
use std::{
    env,
    io::{Read, Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "\
Usage:
  review-feedback-cli html <feedback.md|->
  review-feedback-cli files [project-dir]
  review-feedback-cli bundle [project-dir]
  review-feedback-cli view <feedback.md|-> [project-dir]";

enum Pane {
    Feedback,
    Source,
}

struct App {
    project_files: Vec<ProjectFile>,
    file_list_state: ListState,
    feedback_lines: Vec<Line<'static>>,
    source_lines: Vec<Line<'static>>,
    pane: Pane,
    scroll: u16,
}

impl App {
    fn new(feedback: &str, project_files: Vec<ProjectFile>) -> Self {
        let mut app = Self {
            project_files,
            file_list_state: ListState::default(),
            feedback_lines: view::blocks_to_lines(&render(feedback)),
            source_lines: Vec::new(),
            pane: Pane::Feedback,
            scroll: 0,
        };

        // Select first file if available
        if !app.project_files.is_empty() {
            app.file_list_state.select(Some(0));
        }

        app
    }

    fn next_file(&mut self) {
        if self.project_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.project_files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.refresh_source();
    }

    fn previous_file(&mut self) {
        if self.project_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.project_files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.refresh_source();
    }

    fn show_source(&mut self) {
        if self.file_list_state.selected().is_some() {
            self.pane = Pane::Source;
            self.scroll = 0;
            self.refresh_source();
        }
    }

    fn show_feedback(&mut self) {
        self.pane = Pane::Feedback;
        self.scroll = 0;
    }

    fn refresh_source(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(file) = self.project_files.get(index)
        {
            // Reuse the code block layout for the raw source
            let block = FeedbackBlock::Code {
                language: file.path.extension().unwrap_or_default().to_string(),
                lines: file.content.lines().map(str::to_string).collect(),
            };
            self.source_lines = view::blocks_to_lines(&[block]);
        }
    }

    fn current_lines(&self) -> &[Line<'static>] {
        match self.pane {
            Pane::Feedback => &self.feedback_lines,
            Pane::Source => &self.source_lines,
        }
    }

    fn scroll_down(&mut self) {
        let max = self.current_lines().len().saturating_sub(1);
        if usize::from(self.scroll) < max {
            self.scroll = self.scroll.saturating_add(1);
        }
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Applies one key press. Returns `false` once the viewer should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('j') | KeyCode::PageDown => self.scroll_down(),
            KeyCode::Char('k') | KeyCode::PageUp => self.scroll_up(),
            KeyCode::Down => self.next_file(),
            KeyCode::Up => self.previous_file(),
            KeyCode::Enter => self.show_source(),
            KeyCode::Esc | KeyCode::Char('f') => self.show_feedback(),
            _ => {}
        }
        true
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("review-feedback-cli");
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

    let result = match rest.as_slice() {
        ["html", feedback] => print_html(feedback),
        ["files"] => print_files(None),
        ["files", dir] => print_files(Some(*dir)),
        ["bundle"] => print_bundle(None),
        ["bundle", dir] => print_bundle(Some(*dir)),
        ["view", feedback] => view(feedback, None),
        ["view", feedback, dir] => view(feedback, Some(*dir)),
        _ => {
            eprintln!("{}", USAGE.replace("review-feedback-cli", program));
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    Ok(())
}

fn read_feedback(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read feedback from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read feedback file '{source}'"))
    }
}

/// Project directory from the argument, falling back to the config file.
fn resolve_project(dir: Option<&str>, config: &Config) -> Option<PathBuf> {
    dir.map(PathBuf::from).or_else(|| config.project_path.clone())
}

fn load_project(dir: &Path, config: &Config) -> Result<Vec<ProjectFile>> {
    let files = collect_project_files(dir, &config.upload_filter())
        .with_context(|| format!("Failed to collect project files from '{}'", dir.display()))?;
    log::info!("{} files accepted from {}", files.len(), dir.display());
    Ok(files)
}

fn required_project(dir: Option<&str>) -> Result<(PathBuf, Config)> {
    let config = Config::load_or_default().context("Failed to load config file")?;
    let Some(project_dir) = resolve_project(dir, &config) else {
        anyhow::bail!(
            "No project directory provided and none set in {}",
            Config::config_path().display()
        );
    };
    project::validate_project_dir(&project_dir)?;
    Ok((project_dir, config))
}

fn print_html(feedback: &str) -> Result<()> {
    let text = read_feedback(feedback)?;
    println!("{}", render_html(&text));
    Ok(())
}

fn print_files(dir: Option<&str>) -> Result<()> {
    let (project_dir, config) = required_project(dir)?;
    for file in load_project(&project_dir, &config)? {
        println!("{}", file.path);
    }
    Ok(())
}

fn print_bundle(dir: Option<&str>) -> Result<()> {
    let (project_dir, config) = required_project(dir)?;
    let files = load_project(&project_dir, &config)?;
    print!("{}", bundle(&files));
    Ok(())
}

fn view(feedback: &str, dir: Option<&str>) -> Result<()> {
    let text = read_feedback(feedback)?;
    let config = Config::load_or_default().context("Failed to load config file")?;
    let project_files = match resolve_project(dir, &config) {
        Some(project_dir) => load_project(&project_dir, &config)?,
        None => Vec::new(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&text, project_files);

    // Main loop
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
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Project file panel
    let file_items: Vec<ListItem> = app
        .project_files
        .iter()
        .map(|file| ListItem::new(Line::from(Span::raw(format!("📄 {}", file.path)))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Project files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let title = match app.pane {
        Pane::Feedback => "Feedback".to_string(),
        Pane::Source => app
            .file_list_state
            .selected()
            .and_then(|i| app.project_files.get(i))
            .map(|file| file.path.to_string())
            .unwrap_or_default(),
    };

    let content_text = if app.current_lines().is_empty() {
        vec![Line::from("No feedback to display")]
    } else {
        app.current_lines().to_vec()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("j/k: Scroll | "),
        Span::raw("↑/↓: Select file | "),
        Span::raw("Enter: Show source | Esc/f: Feedback"),
    ]));

    f.render_widget(help, rows[1]);
}
