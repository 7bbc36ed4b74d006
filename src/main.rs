//! tocbox: render a book's sidebar for one page and carry its scroll across page loads.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tocbox::controller::{ScrollRestore, SidebarController};
use tocbox::host::{Scrollbox, SidebarHost};
use tocbox::location::CurrentPage;
use tocbox::{app_state, config, formats, render, scroll, ui};

#[derive(Parser)]
#[command(name = "tocbox")]
#[command(about = "Table-of-contents sidebar state for static books", long_about = None)]
struct Args {
    /// Chapter list: a SUMMARY.md or a JSON navigation tree
    #[arg(value_name = "TREE")]
    tree: PathBuf,

    /// Address of the page the sidebar is shown on
    #[arg(long, short = 'l', default_value = "file:///")]
    location: String,

    /// Prefix leading from the page back to the book root
    #[arg(long)]
    path_to_root: Option<String>,

    /// JSON session file holding the sidebar scroll offset
    #[arg(long)]
    session: Option<PathBuf>,

    /// Click the sidebar link with this (book-relative) href after attaching
    #[arg(long, value_name = "HREF")]
    click: Option<String>,

    /// Enable folding, with sections shallower than this depth expanded
    #[arg(long, value_name = "DEPTH")]
    fold_level: Option<usize>,

    /// Browse the book interactively in the terminal
    #[arg(long)]
    tui: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> tocbox::Result<()> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(path_to_root) = args.path_to_root {
        cfg.path_to_root = path_to_root;
    }
    if let Some(level) = args.fold_level {
        cfg.fold_enable = true;
        cfg.fold_level = level;
    }
    let session = args.session.or_else(|| cfg.session_file.clone().map(PathBuf::from));

    let tree = formats::load_tree(&args.tree)?;
    if tree.is_empty() {
        eprintln!("No chapters found in {}", args.tree.display());
        return Ok(());
    }

    let mut scroll_state = match &session {
        Some(path) => scroll::load_session(path)?,
        None => scroll::ScrollState::empty(),
    };

    if args.tui {
        let path_to_root = cfg.path_to_root.clone();
        let app = app_state::AppState::open(
            tree,
            cfg,
            &args.location,
            &path_to_root,
            scroll_state,
            0,
        )?;
        let app = run_tui(app)?;
        return save(session.as_deref(), &app.scroll);
    }

    let page = CurrentPage::new(&args.location, &cfg.index_document)?;
    let mut scrollbox = Scrollbox::new(cfg.row_height, cfg.viewport_height);
    let sidebar = SidebarController::new(tree, cfg.path_to_root.clone())
        .with_options(cfg.render_options())
        .attach(&mut scrollbox, &page, &mut scroll_state);

    match sidebar.restore() {
        ScrollRestore::Restored(offset) => log::info!("restored scroll offset {offset}"),
        ScrollRestore::Centered(_) => {
            log::info!("centred active link at offset {}", scrollbox.scroll_top());
        }
        ScrollRestore::Unchanged => log::info!("no active link for {}", page.normalized()),
    }

    if let Some(href) = args.click {
        let wanted = format!("{}{href}", cfg.path_to_root);
        let target = render::chapter_links(scrollbox.dom()).into_iter().find(|link| {
            scrollbox
                .dom()
                .attribute(*link, "href")
                .is_some_and(|h| h == wanted || h == href)
        });
        match target.and_then(|link| sidebar.click(&scrollbox, link, &mut scroll_state)) {
            Some(click) => log::info!("clicked {:?}, recorded scroll {}", click.href, click.recorded),
            None => eprintln!("No sidebar link with href {href}"),
        }
    }

    println!("{}", scrollbox.dom().outer_html());
    save(session.as_deref(), &scroll_state)
}

fn save(session: Option<&Path>, state: &scroll::ScrollState) -> tocbox::Result<()> {
    match session {
        Some(path) => scroll::save_session(path, state),
        None => Ok(()),
    }
}

fn run_tui(mut app: app_state::AppState) -> io::Result<app_state::AppState> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else {
        println!("{}", app.page.normalized());
    }

    Ok(app)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    let mut centred = false;
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // The first draw sizes the viewport; centre the active row once it is known.
        if !centred {
            centred = true;
            if let (ScrollRestore::Centered(node), Some(_)) =
                (app.sidebar.restore(), app.active_row())
            {
                app.scrollbox.scroll_into_view_centered(node);
                continue;
            }
        }

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
                KeyCode::Enter => {
                    app.click_cursor();
                }
                KeyCode::Char(' ') => app.toggle_cursor(),
                KeyCode::Char('n') | KeyCode::Right => {
                    app.next_chapter();
                }
                KeyCode::Char('p') | KeyCode::Left => {
                    app.prev_chapter();
                }
                _ => {}
            }
        }
    }
}
