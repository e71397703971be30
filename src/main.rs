use hollow::adapters::FilePrefsStore;
use hollow::app::{App, AppMessage, Route, Tab};
use hollow::auth::PrefsManager;
use hollow::traits::FlagStore;
use hollow::ui;
use hollow::widgets::InputField;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle the --reset flag.
///
/// Removes the preferences file, clearing the persisted session flag. There
/// is no in-app logout, so this is the way back to the login screen.
fn handle_reset_command() -> Result<()> {
    let manager = match PrefsManager::new() {
        Some(m) => m,
        None => {
            eprintln!("Error: could not determine home directory.");
            std::process::exit(1);
        }
    };

    if manager.clear() {
        println!("Preferences cleared. The next launch starts at the login screen.");
        Ok(())
    } else {
        eprintln!(
            "Error: failed to remove {}",
            manager.prefs_path().display()
        );
        std::process::exit(1);
    }
}

/// Route tracing output to `~/.hollow/hollow.log`.
///
/// The TUI owns the terminal, so logs go to a file. `RUST_LOG` controls the
/// filter, defaulting to `info`. Best-effort: if the file cannot be opened
/// the app runs without logging.
fn init_file_logging() {
    use tracing_subscriber::EnvFilter;

    let Some(home) = dirs::home_dir() else {
        return;
    };
    let log_dir = home.join(".hollow");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("hollow.log"))
    {
        Ok(f) => f,
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init();
}

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("hollow {}", VERSION);
        std::process::exit(0);
    }

    // Handle --reset flag before the terminal is touched
    if std::env::args().any(|arg| arg == "--reset") {
        return handle_reset_command();
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    init_file_logging();
    tracing::info!("hollow {} starting", VERSION);

    // Create Tokio runtime for the entire application
    let runtime = tokio::runtime::Runtime::new()?;

    // Open the prefs-backed flag store before the TUI starts, while stderr
    // is still visible
    let flags: Arc<dyn FlagStore> = match FilePrefsStore::new() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("Failed to open preferences: {}", e);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Enter alternate screen and enable bracketed paste so pasted text
    // arrives as one event instead of a burst of key presses
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    // Initialize application state
    let mut app = App::new(flags);

    // Capture initial terminal dimensions
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal
    restore_terminal(&mut terminal)?;

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);

        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Apply an editing key to a single-line input field.
///
/// Covers cursor movement and character edits; anything else is ignored.
fn edit_input(input: &mut InputField, key: &KeyEvent) {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete_char(),
        KeyCode::Left => input.move_cursor_left(),
        KeyCode::Right => input.move_cursor_right(),
        KeyCode::Home => input.move_cursor_home(),
        KeyCode::End => input.move_cursor_end(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert_char(c);
        }
        _ => {}
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Kick off the persisted-flag read. Until it reports back through the
    // message channel the UI sits on the loading screen.
    app.start_auth_resolution();

    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // Poll keyboard events, async messages and the animation tick
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(100));

        tokio::select! {
            // Animation tick for the loading and login spinners
            _ = timeout => {
                app.tick();
                if !app.gate.state().is_resolved() || app.login_pending {
                    app.mark_dirty();
                }
            }

            // Handle keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            // Update app state with new terminal dimensions
                            app.update_terminal_dimensions(width, height);
                            continue;
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            // Any key press likely changes state
                            app.mark_dirty();

                            // Global keybinds (always active)
                            match key.code {
                                KeyCode::Char('c')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    app.quit();
                                    return Ok(());
                                }
                                KeyCode::Char('q') if !app.input_active() => {
                                    app.quit();
                                    return Ok(());
                                }
                                _ => {}
                            }

                            // While the session is unresolved the loading
                            // screen ignores everything but quit
                            if !app.gate.state().is_resolved() {
                                continue;
                            }

                            // =========================================================
                            // Compose overlay (highest priority when open)
                            // =========================================================
                            if app.compose.is_some() {
                                match key.code {
                                    KeyCode::Esc => app.close_compose(),
                                    KeyCode::Enter => app.submit_compose(),
                                    KeyCode::Tab => app.compose_next_category(),
                                    KeyCode::BackTab => app.compose_prev_category(),
                                    KeyCode::Char('p')
                                        if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                    {
                                        app.compose_toggle_photo();
                                    }
                                    KeyCode::Char('l')
                                        if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                    {
                                        app.compose_toggle_live();
                                    }
                                    _ => {
                                        if let Some(compose) = app.compose.as_mut() {
                                            edit_input(&mut compose.input, &key);
                                        }
                                    }
                                }
                                continue;
                            }

                            // =========================================================
                            // Login wall
                            // =========================================================
                            if app.current_route() == &Route::Login {
                                if key.code == KeyCode::Enter {
                                    app.start_login();
                                }
                                continue;
                            }

                            // =========================================================
                            // Chat detail input (live whenever a chat is open)
                            // =========================================================
                            if app.open_chat_id.is_some() {
                                match key.code {
                                    KeyCode::Esc => app.close_chat(),
                                    KeyCode::Enter => app.send_chat_message(),
                                    _ => {
                                        edit_input(&mut app.chat_input, &key);
                                    }
                                }
                                continue;
                            }

                            // =========================================================
                            // Screen keys
                            // =========================================================
                            match app.current_route().clone() {
                                Route::PostDetail(post_id) => match key.code {
                                    KeyCode::Char('l') => {
                                        app.toggle_like(&post_id);
                                    }
                                    KeyCode::Esc | KeyCode::Backspace => {
                                        app.back();
                                    }
                                    _ => {}
                                },
                                Route::Tabs(tab) => match key.code {
                                    KeyCode::Char('1') => app.switch_tab(Tab::Feed),
                                    KeyCode::Char('2') => app.switch_tab(Tab::Messages),
                                    KeyCode::Char('3') => app.switch_tab(Tab::Profile),
                                    KeyCode::Up => app.move_up(),
                                    KeyCode::Down => app.move_down(),
                                    KeyCode::Enter => match tab {
                                        Tab::Feed => app.open_selected_post(),
                                        Tab::Messages => app.open_selected_chat(),
                                        Tab::Profile => app.open_selected_profile_post(),
                                    },
                                    KeyCode::Char('l') if tab == Tab::Feed => {
                                        if let Some(id) = app.selected_feed_post_id() {
                                            app.toggle_like(&id);
                                        }
                                    }
                                    KeyCode::Left if tab == Tab::Feed => {
                                        app.cycle_filter_prev();
                                    }
                                    KeyCode::Right if tab == Tab::Feed => {
                                        app.cycle_filter_next();
                                    }
                                    KeyCode::Char('n') if tab == Tab::Feed => {
                                        app.open_compose();
                                    }
                                    _ => {}
                                },
                                // Every login key was consumed above
                                Route::Login => {}
                            }
                        }
                        Event::Paste(text) => {
                            // Paste goes to whichever input is live; the
                            // fields are single-line, drop line breaks
                            let chars = text.chars().filter(|c| *c != '\n' && *c != '\r');
                            if let Some(compose) = app.compose.as_mut() {
                                for ch in chars {
                                    compose.input.insert_char(ch);
                                }
                                app.mark_dirty();
                            } else if app.open_chat_id.is_some() {
                                for ch in chars {
                                    app.chat_input.insert_char(ch);
                                }
                                app.mark_dirty();
                            }
                        }
                        _ => {
                            // Ignore other events (focus, etc.)
                        }
                    }
                }
            }

            // Handle async messages from the session tasks
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
