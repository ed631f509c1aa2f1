// ============================================================================
// Worker : chargement du taux au montage de l'écran
// ============================================================================
// Le thread UI ne bloque jamais sur le réseau :
// - un thread dédié crée son propre runtime tokio
// - il exécute UN fetch, puis envoie le résultat sur un channel
// - le thread UI lit le channel avec try_recv entre deux frames
//
// Si l'écran est démonté avant la fin du fetch, le Receiver a été droppé :
// l'envoi échoue et le résultat est simplement jeté.
// ============================================================================

use std::sync::mpsc;
use std::thread::JoinHandle;

use tracing::{debug, error, info};

use crate::api::nbu::fetch_usd_rate;
use crate::app::FetchOutcome;

/// Lance le fetch unique du taux USD en arrière-plan
///
/// Retourne le Receiver sur lequel arrivera exactement un FetchOutcome,
/// et le handle du thread.
pub fn spawn_rate_fetch(url: String) -> (mpsc::Receiver<FetchOutcome>, JoinHandle<()>) {
    let (result_tx, result_rx) = mpsc::channel::<FetchOutcome>();

    let handle = std::thread::spawn(move || {
        let outcome = run_fetch(&url);

        if result_tx.send(outcome).is_err() {
            debug!("Screen unmounted before fetch completed, dropping result");
        }
    });

    (result_rx, handle)
}

/// Exécute le fetch dans un runtime tokio local au thread
fn run_fetch(url: &str) -> FetchOutcome {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = ?e, "Failed to create tokio runtime");
            return FetchOutcome::Failed(e.to_string());
        }
    };

    info!(%url, "Fetching exchange rate");
    match runtime.block_on(fetch_usd_rate(url)) {
        Ok(rates) => FetchOutcome::Loaded(rates),
        Err(e) => {
            error!(error = ?e, "Exchange rate fetch failed");
            // {:#} : message avec toute la chaîne de contexte anyhow
            FetchOutcome::Failed(format!("{e:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unreachable_endpoint_reports_failure() {
        let (rx, handle) = spawn_rate_fetch("http://127.0.0.1:9/exchange?json".to_string());

        let outcome = rx.recv_timeout(Duration::from_secs(30)).unwrap();
        assert!(matches!(outcome, FetchOutcome::Failed(_)));

        handle.join().unwrap();
    }

    #[test]
    fn test_dropped_receiver_does_not_panic_worker() {
        let (rx, handle) = spawn_rate_fetch("http://127.0.0.1:9/exchange?json".to_string());
        drop(rx);

        assert!(handle.join().is_ok());
    }
}
