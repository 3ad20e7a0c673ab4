//! Long polling with `getUpdates`.
//!
//! [`UpdateStream`] confirms every update it yields: the next poll is sent
//! with `offset = last_update_id + 1`, so Telegram drops what was seen.
//! A failed poll is logged and the stream waits [`PollOptions::error_delay`]
//! (or the `retry_after` the server asked for) before polling again.
//!
//! Once cancelled the stream yields nothing more, not even updates it has
//! already fetched. Those stay unconfirmed and come back on the next start,
//! while the ones it did yield are confirmed with one last short poll.

use std::collections::VecDeque;
use std::time::Duration;

use botapi_types::methods::GetUpdates;
use botapi_types::{Update, UpdateType};
use tokio_util::sync::CancellationToken;

use crate::{BotApi, BotApiExt, InvocationError};

// ─── PollOptions ──────────────────────────────────────────────────────────────

/// Parameters of every `getUpdates` call and the pacing between failed polls.
#[derive(Clone, Debug)]
pub struct PollOptions {
    /// Long-poll timeout in seconds.
    pub timeout:         u32,
    /// 1-100 updates per poll; absent lets the server pick (100).
    pub limit:           Option<u32>,
    /// Absent keeps the previous setting on the server.
    pub allowed_updates: Option<Vec<UpdateType>>,
    /// Pause after a failed poll.
    pub error_delay:     Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            timeout:         30,
            limit:           None,
            allowed_updates: None,
            error_delay:     Duration::from_secs(5),
        }
    }
}

// ─── UpdateStream ─────────────────────────────────────────────────────────────

/// Asynchronous stream of [`Update`]s fetched by long polling.
pub struct UpdateStream<C> {
    client:  C,
    options: PollOptions,
    cancel:  CancellationToken,
    /// One past the last update handed out.
    offset:    Option<i64>,
    /// The offset the server last accepted.
    confirmed: Option<i64>,
    pending:   VecDeque<Update>,
}

impl<C: BotApi> UpdateStream<C> {
    pub fn new(client: C, options: PollOptions, cancel: CancellationToken) -> Self {
        Self { client, options, cancel, offset: None, confirmed: None, pending: VecDeque::new() }
    }

    /// Start from `offset` instead of the oldest unconfirmed update.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset); self
    }

    /// The `offset` the next poll will send.
    pub fn offset(&self) -> Option<i64> { self.offset }

    pub fn client(&self) -> &C { &self.client }

    /// Wait for the next update.
    ///
    /// Returns `Ok(None)` once the cancellation token fires, and `Err` only
    /// for errors that repeating the poll can't fix (see
    /// [`InvocationError::is_fatal`]).
    pub async fn next(&mut self) -> Result<Option<Update>, InvocationError> {
        loop {
            if self.cancel.is_cancelled() {
                return self.finish().await;
            }
            if let Some(update) = self.pending.pop_front() {
                self.offset = Some(update.update_id + 1);
                return Ok(Some(update));
            }

            match self.poll().await {
                Ok(()) => {}
                Err(InvocationError::Cancelled) => return self.finish().await,
                Err(e) if e.is_fatal() => {
                    tracing::error!("[botapi] getUpdates failed permanently: {e}");
                    return Err(e);
                }
                Err(e) => {
                    let delay = e.retry_after()
                        .map(|s| Duration::from_secs(u64::from(s)))
                        .unwrap_or(self.options.error_delay);
                    tracing::warn!("[botapi] getUpdates failed: {e}; polling again in {delay:?}");
                    tokio::select! {
                        _ = self.cancel.cancelled() => return self.finish().await,
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
            }
        }
    }

    async fn poll(&mut self) -> Result<(), InvocationError> {
        let req = GetUpdates {
            offset:          self.offset,
            limit:           self.options.limit,
            timeout:         Some(self.options.timeout),
            allowed_updates: self.options.allowed_updates.clone(),
        };
        let updates = self.client.invoke_with_cancel(&req, &self.cancel).await?;
        self.confirmed = req.offset;
        if !updates.is_empty() {
            tracing::debug!("[botapi] received {} update(s)", updates.len());
        }
        let mut seen = self.offset;
        for update in updates {
            if seen.is_some_and(|o| update.update_id < o) {
                continue;
            }
            seen = Some(update.update_id + 1);
            self.pending.push_back(update);
        }
        Ok(())
    }

    /// Tell the server which updates were handed out before stopping.
    async fn finish(&mut self) -> Result<Option<Update>, InvocationError> {
        if self.offset.is_none() || self.offset == self.confirmed {
            return Ok(None);
        }
        let req = GetUpdates {
            offset:          self.offset,
            limit:           Some(1),
            timeout:         Some(0),
            allowed_updates: None,
        };
        match self.client.invoke(&req).await {
            Ok(_)  => self.confirmed = self.offset,
            Err(e) => tracing::warn!("[botapi] could not confirm offset {:?} on stop: {e}", self.offset),
        }
        Ok(None)
    }
}
