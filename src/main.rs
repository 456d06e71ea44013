//! rubric: a scroll-synced table of contents for terminal document reading.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rubric::{
    anchor, app_state, collector, config, extract, formats, input, layout, outline, render,
    scrollspy, ui,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rubric")]
#[command(about = "Scroll-synced table of contents for terminal reading", long_about = None)]
struct Args {
    /// Document to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the document outline as JSON and exit
    #[arg(long)]
    outline: bool,

    /// Read-line offset in rows, overriding the configured value
    #[arg(long)]
    offset: Option<i64>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(offset) = args.offset {
        cfg.read_line_offset = offset;
    }

    let source = input::read_document(&args.file)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let format = formats::markdown::MarkdownFormat;
    let mut raw = extract::extract_headings(&source, &format)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    anchor::assign_anchors(&mut raw, cfg.auto_anchor);
    let headings = collector::collect(raw);

    if args.outline {
        let tree = outline::build(&headings);
        let nodes = outline::outline_of(&tree, &headings);
        let json = serde_json::to_string_pretty(&nodes).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let mode = layout::decide(&headings, cfg.sidebar_width);
    let renderer = render::Renderer::new(cfg.wrap_width, &cfg.code_theme);
    let doc = renderer.render(&source, &headings);
    let rows = match mode {
        layout::LayoutMode::Split => outline::flatten(&outline::build(&headings), &headings),
        layout::LayoutMode::FullWidth => Vec::new(),
    };

    let title = args
        .file
        .file_name()
        .map_or_else(|| args.file.display().to_string(), |n| n.to_string_lossy().to_string());
    let spy_config = scrollspy::SpyConfig {
        read_offset: cfg.read_line_offset,
        slack_divisor: scrollspy::DEFAULT_SLACK_DIVISOR,
    };
    let state = app_state::ReaderState::new(
        title,
        doc,
        headings,
        rows,
        mode,
        cfg.sidebar_width,
        spy_config,
    );

    run_tui(state)
}

fn run_tui(mut app: app_state::ReaderState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::ReaderState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            match app.focus {
                app_state::Pane::Content => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                    KeyCode::PageUp => app.page_up(),
                    KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
                    KeyCode::Home | KeyCode::Char('g') => app.to_top(),
                    KeyCode::End | KeyCode::Char('G') => app.to_bottom(),
                    KeyCode::Tab => app.focus_sidebar(),
                    _ => {}
                },
                app_state::Pane::Sidebar => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
                    KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
                    KeyCode::Enter => app.jump_to_cursor(),
                    KeyCode::Tab | KeyCode::Esc => app.focus_content(),
                    _ => {}
                },
            }
        }
    }
}
