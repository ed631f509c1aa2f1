// ============================================================================
// Currency Transducer - convertisseur USD -> UAH
// ============================================================================
// Programme TUI d'un seul écran : saisir un montant en dollars, lire le
// montant en hryvnias au taux officiel du jour de la NBU.
//
// Déroulement :
// 1. Logging vers fichier (le TUI occupe stdout)
// 2. Terminal en raw mode + alternate screen + souris
// 3. Montage de l'écran : UN fetch du taux, en arrière-plan
// 4. Event loop : résultat du fetch -> rendu -> événement
// 5. Démontage de l'écran, restauration du terminal
// ============================================================================

use std::io;
use std::sync::mpsc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use currency_transducer::app::{App, FetchOutcome};
use currency_transducer::config::Config;
use currency_transducer::handler::handle_event;
use currency_transducer::ui::{render, EventHandler, ScreenLayout};
use currency_transducer::worker::spawn_rate_fetch;

// ============================================================================
// Initialisation du logging
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// Rotation quotidienne dans `config.log_dir`, niveau via RUST_LOG :
/// ```bash
/// tail -f ~/.local/share/currency-transducer/logs/currency-transducer.log.*
/// RUST_LOG=currency_transducer=trace cargo run
/// ```
fn init_logging(config: &Config) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = &config.log_dir;
    std::fs::create_dir_all(log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, log_dir, "currency-transducer.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "currency_transducer=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber tracing")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    let config = Config::from_env();

    // Sans logs, l'application reste utilisable
    init_logging(&config).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(rates_url = %config.rates_url, "Currency Transducer starting up");

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let mut app = App::with_max_input_len(config.max_input_len);
    let events = EventHandler::new(config.tick_rate);

    // Montage : le fetch part une seule fois, ici
    app.mount();
    let (fetch_rx, _fetch_handle) = spawn_rate_fetch(config.rates_url.clone());

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events, fetch_rx);

    // Démontage : le Receiver est déjà droppé par run(), un fetch encore en
    // vol ne pourra plus rien livrer. Le thread n'est pas attendu.
    app.unmount();

    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// À chaque itération :
//   0. résultat du fetch (non bloquant)
//   1. rendu
//   2. événement terminal (bloquant au plus un tick)
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    fetch_rx: mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    // Un seul résultat attendu : on arrête de lire le channel après
    let mut fetch_rx = Some(fetch_rx);

    while app.is_running() {
        // 0. RÉSULTAT DU FETCH
        if let Some(rx) = &fetch_rx {
            match rx.try_recv() {
                Ok(outcome) => {
                    app.apply_fetch(outcome);
                    fetch_rx = None;
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    error!("Fetch worker disconnected without a result");
                    fetch_rx = None;
                }
            }
        }

        // 1. RENDER
        terminal.draw(|frame| render(frame, app))?;

        // 2. INPUT
        // Les zones cliquables sont recalculées sur la taille courante,
        // comme lors du rendu
        let event = events.next()?;
        let layout = ScreenLayout::new(terminal.size()?);
        handle_event(app, event, &layout);
    }

    Ok(())
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================

/// Configure le terminal en mode TUI (raw mode, alternate screen, souris)
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Échec de l'activation du raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
