//! The current-art buffer and its export actions.
//!
//! A [`Session`] holds the most recent successful conversion. Conversions
//! can finish out of order (a slow decode may complete after a later one),
//! so every conversion is tagged with a [`RequestId`] and only the most
//! recently issued id may replace the current art.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ascii::AsciiArt;
use crate::error::ConvertError;
use crate::sink::{self, Clipboard, ClipboardError, Export, SaveError};

/// Ticket for one conversion request. Ids strictly increase within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happened to a finished conversion.
#[derive(Debug)]
pub enum CommitOutcome {
    /// The art is now current
    Applied,
    /// A newer request was issued meanwhile; the result was dropped
    Stale { latest: RequestId },
    /// The conversion failed; the current art is unchanged
    Failed(ConvertError),
}

#[derive(Debug, Default)]
pub struct Session {
    current: Option<AsciiArt>,
    last_issued: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the id for a new conversion. Any earlier request becomes stale.
    pub fn begin_request(&mut self) -> RequestId {
        self.last_issued += 1;
        RequestId(self.last_issued)
    }

    /// The most recently issued id, if any.
    pub fn latest_request(&self) -> Option<RequestId> {
        (self.last_issued > 0).then_some(RequestId(self.last_issued))
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        id.0 == self.last_issued
    }

    /// Apply the result of a conversion.
    ///
    /// Stale results are discarded whether they succeeded or not, so an old
    /// failure is never reported over a newer request either.
    pub fn commit(
        &mut self,
        id: RequestId,
        result: Result<AsciiArt, ConvertError>,
    ) -> CommitOutcome {
        if !self.is_latest(id) {
            let latest = RequestId(self.last_issued);
            log::debug!("Discarding result of {}, latest is {}", id, latest);
            return CommitOutcome::Stale { latest };
        }

        match result {
            Ok(art) => {
                self.current = Some(art);
                CommitOutcome::Applied
            }
            Err(e) => CommitOutcome::Failed(e),
        }
    }

    /// The current art, if any conversion has succeeded.
    pub fn current(&self) -> Option<&AsciiArt> {
        self.current.as_ref()
    }

    /// Copy the current art to `clipboard`.
    pub fn copy_to<C: Clipboard + ?Sized>(
        &self,
        clipboard: &mut C,
    ) -> Result<Export, ClipboardError> {
        let Some(art) = &self.current else {
            return Ok(Export::NothingToExport);
        };
        sink::copy_to_clipboard(clipboard, art.as_str())?;
        Ok(Export::Done(()))
    }

    /// Save the current art to `path`.
    pub fn save_to(&self, path: &Path) -> Result<Export<PathBuf>, SaveError> {
        let Some(art) = &self.current else {
            return Ok(Export::NothingToExport);
        };
        let written = sink::save_as_file(art.as_str(), path)?;
        Ok(Export::Done(written))
    }
}
