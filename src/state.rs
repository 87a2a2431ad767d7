// state.rs
use crate::domain::CampaignBoard;
use crate::errors::ServerError;
use crate::locale::Locale;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// Source of "today". Passed around explicitly so tests can pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The in-memory session: rebuilt from the data source on every start.
pub struct AppState {
    board: Mutex<CampaignBoard>,
    clock: Box<dyn Clock>,
    pub locale: Locale,
}

impl AppState {
    pub fn new(board: CampaignBoard, clock: Box<dyn Clock>, locale: Locale) -> Self {
        Self {
            board: Mutex::new(board),
            clock,
            locale,
        }
    }

    pub fn today(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Run `f` with exclusive access to the board. All mutation goes through here.
    pub fn with_board<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut CampaignBoard) -> Result<T, ServerError>,
    {
        let mut board = self.board.lock().map_err(|_| ServerError::InternalError)?;
        f(&mut board)
    }
}
