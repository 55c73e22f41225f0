//! Local Notice Mirror
//!
//! The client keeps a local replica of the notice list, updated
//! synchronously from mutation responses rather than by re-fetching:
//! a successful post inserts the returned notice, a successful delete
//! removes it. A full `refresh` replaces the replica from a list
//! response. At most one mutation may be in flight at a time.

use uuid::Uuid;

use crate::error::{ClientError, ClientResult};
use crate::models::NoticeView;

/// Client-side replica of the notice board, newest first
#[derive(Debug, Default)]
pub struct NoticeMirror {
    notices: Vec<NoticeView>,
    mutation_in_flight: bool,
}

impl NoticeMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[NoticeView] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Replace the replica with a freshly fetched list
    pub fn refresh(&mut self, mut notices: Vec<NoticeView>) {
        notices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.notices = notices;
    }

    /// Mark a mutation as started; fails if one is already running
    pub fn begin_mutation(&mut self) -> ClientResult<()> {
        if self.mutation_in_flight {
            return Err(ClientError::MutationInFlight);
        }
        self.mutation_in_flight = true;
        Ok(())
    }

    /// Mark the in-flight mutation as finished, success or not
    pub fn end_mutation(&mut self) {
        self.mutation_in_flight = false;
    }

    pub fn mutation_in_flight(&self) -> bool {
        self.mutation_in_flight
    }

    /// Apply a successful post response, keeping newest-first order
    pub fn apply_posted(&mut self, notice: NoticeView) {
        let position = self
            .notices
            .partition_point(|n| n.created_at > notice.created_at);
        self.notices.insert(position, notice);
    }

    /// Apply a successful delete response
    pub fn apply_deleted(&mut self, id: Uuid) {
        self.notices.retain(|n| n.id != id);
    }
}
