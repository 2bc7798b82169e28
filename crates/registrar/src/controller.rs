//! The registration workflow.
//!
//! [`Registrar`] wires a record repository, an id generator, a clock and a
//! notifier to the table view. It has two entry points: [`Registrar::initialize`]
//! renders what is already stored, and [`Registrar::handle_submission`] takes
//! one filled-in form through validation, persistence and rendering.

use std::cell::RefCell;
use std::io::Write;

use tracing::{debug, info};

use crate::error::Result;
use crate::ids::{Clock, IdGenerator};
use crate::record::{FormState, StudentRecord};
use crate::repository::RecordRepository;
use crate::validation::validate;
use crate::view::TableView;

/// Message shown after a successful registration.
pub const SUCCESS_MESSAGE: &str = "Registration Successful! Student added to the database.";

/// Whether a notification reports success or a rejected submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The registration was saved.
    Success,
    /// The registration was rejected.
    Failure,
}

/// Delivers blocking notifications to the user.
pub trait Notifier {
    /// Show `message`. Returns once the user has been told.
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Prints notifications: successes to stdout, failures to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    /// Create a notifier. When `quiet`, only failures are printed.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Whether a notice of this kind reaches the terminal.
    #[must_use]
    pub fn prints(&self, kind: NoticeKind) -> bool {
        kind == NoticeKind::Failure || !self.quiet
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        if !self.prints(kind) {
            return;
        }
        let _ = match kind {
            NoticeKind::Success => writeln!(std::io::stdout().lock(), "{message}"),
            NoticeKind::Failure => writeln!(std::io::stderr().lock(), "{message}"),
        };
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices.borrow().clone()
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<String> {
        self.notices.borrow().last().map(|(_, m)| m.clone())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.borrow_mut().push((kind, message.to_string()));
    }
}

/// The registration controller.
#[derive(Debug)]
pub struct Registrar<R, I, C, N> {
    repository: R,
    ids: I,
    clock: C,
    notifier: N,
    view: TableView,
}

impl<R, I, C, N> Registrar<R, I, C, N>
where
    R: RecordRepository,
    I: IdGenerator,
    C: Clock,
    N: Notifier,
{
    /// Assemble a controller from its capabilities.
    pub fn new(repository: R, ids: I, clock: C, notifier: N) -> Self {
        Self {
            repository,
            ids,
            clock,
            notifier,
            view: TableView::new(),
        }
    }

    /// Load every stored record and render them.
    ///
    /// Returns the number of records loaded. Meant to run once, before any
    /// submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn initialize(&mut self) -> Result<usize> {
        let records = self.repository.load_all()?;
        self.view.clear();
        for record in &records {
            self.ids.observe(record.id);
            self.view.push_record(record);
        }
        self.view.set_empty(records.is_empty());
        debug!(count = records.len(), "Rendered stored records");
        Ok(records.len())
    }

    /// Process one submission of `form`.
    ///
    /// On success the record is stored, a row is added, the form is cleared
    /// and the user is told. On a validation failure the user is told why,
    /// nothing is stored and the form keeps its values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::error::Error::Validation) for a
    /// rejected form, or a storage error if saving fails.
    pub fn handle_submission(&mut self, form: &mut FormState) -> Result<StudentRecord> {
        let created_at = self.clock.now();
        let id = self.ids.next_id(created_at);
        let record = form.to_record(id, created_at);

        if let Err(err) = validate(&record) {
            self.notifier.notify(NoticeKind::Failure, err.message());
            return Err(err.into());
        }

        self.repository.append(record.clone())?;
        self.view.push_record(&record);
        self.view.set_empty(false);
        form.reset();

        info!(id = record.id, "Registered student");
        self.notifier.notify(NoticeKind::Success, SUCCESS_MESSAGE);
        Ok(record)
    }

    /// The current table view.
    pub fn view(&self) -> &TableView {
        &self.view
    }

    /// The repository records are stored in.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The notifier messages are sent to.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
