use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::client::CatalogSource;
use super::error::CatalogError;
use super::request::FetchTicket;
use crate::models::ArtworkPage;

/// Result of one fetch, carrying the ticket it was issued for
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub page: u32,
    pub result: Result<ArtworkPage, CatalogError>,
}

/// Runs catalog fetches on worker threads.
///
/// Fetches are not cancelled when superseded; every spawned fetch eventually
/// delivers an outcome and the view decides by sequence number whether to
/// apply it.
pub struct Fetcher {
    source: Arc<dyn CatalogSource>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl Fetcher {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Start fetching the page described by `ticket` in the background
    pub fn spawn(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        debug!(seq = ticket.seq, page = ticket.request.page, "spawning fetch");
        thread::spawn(move || {
            let result = source.fetch_page(&ticket.request);
            let outcome = FetchOutcome { seq: ticket.seq, page: ticket.request.page, result };
            // Receiver is gone once the app has quit
            if tx.send(outcome).is_err() {
                warn!(seq = ticket.seq, "fetch finished after the view closed");
            }
        });
    }

    /// Run a fetch on the calling thread (used by the non-interactive CLI)
    pub fn fetch_now(&self, ticket: FetchTicket) -> FetchOutcome {
        let result = self.source.fetch_page(&ticket.request);
        FetchOutcome { seq: ticket.seq, page: ticket.request.page, result }
    }

    /// Next completed outcome, if any, without blocking
    pub fn try_next(&self) -> Option<FetchOutcome> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next completed outcome
    pub fn next_timeout(&self, timeout: Duration) -> Option<FetchOutcome> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::catalog::PageRequest;
    use crate::models::Artwork;

    /// Returns one record whose id equals the requested page
    struct EchoSource {
        calls: Mutex<Vec<PageRequest>>,
    }

    impl CatalogSource for EchoSource {
        fn fetch_page(&self, request: &PageRequest) -> Result<ArtworkPage, CatalogError> {
            self.calls.lock().unwrap().push(*request);
            Ok(ArtworkPage {
                records: vec![Artwork::new(request.page as u64, "T", "A", "D")],
                total: 100,
            })
        }
    }

    fn ticket(seq: u64, page: u32) -> FetchTicket {
        FetchTicket { seq, request: PageRequest::new(page, 5) }
    }

    #[test]
    fn test_spawn_delivers_outcome() {
        let fetcher = Fetcher::new(Arc::new(EchoSource { calls: Mutex::new(vec![]) }));

        fetcher.spawn(ticket(1, 4));
        let outcome = fetcher.next_timeout(Duration::from_secs(5)).unwrap();

        assert_eq!(outcome.seq, 1);
        assert_eq!(outcome.page, 4);
        assert_eq!(outcome.result.unwrap().records[0].id, 4);
    }

    #[test]
    fn test_fetch_now_uses_request() {
        let source = Arc::new(EchoSource { calls: Mutex::new(vec![]) });
        let fetcher = Fetcher::new(source.clone());

        let outcome = fetcher.fetch_now(ticket(7, 2));

        assert_eq!(outcome.seq, 7);
        assert_eq!(source.calls.lock().unwrap().as_slice(), &[PageRequest::new(2, 5)]);
    }

    #[test]
    fn test_try_next_empty() {
        let fetcher = Fetcher::new(Arc::new(EchoSource { calls: Mutex::new(vec![]) }));
        assert!(fetcher.try_next().is_none());
    }
}
