// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Applies a strategy across a source list, one item at a time.

use std::borrow::Cow;

use crate::error::SyncError;
use crate::strategy::{Strategy, SyncOutcome};

/// Options of a synchronization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
pub struct SyncOptions {
    /// Add each created record to the destination list seen by later items of the
    /// same run. Off by default: the destination list is a snapshot taken before the
    /// run, so two source items with the same key each create a counterpart.
    #[serde(default)]
    pub refresh_after_create: bool,
}

/// Runs `strategy` over `sources` against a snapshot of `destinations`.
///
/// Returns one outcome per source item, in the same order.
///
/// # Errors
///
/// Returns the first error raised by the strategy. The remaining items are not
/// processed and no outcomes are returned.
pub async fn synchronize<S>(
    sources: &[S::Source],
    destinations: &[S::Destination],
    strategy: &S,
) -> Result<Vec<SyncOutcome>, SyncError>
where
    S: Strategy,
    S::Destination: Clone,
{
    synchronize_with(sources, destinations, strategy, &SyncOptions::default()).await
}

/// Same as [`synchronize`], with explicit [`SyncOptions`].
///
/// # Errors
///
/// Returns the first error raised by the strategy.
pub async fn synchronize_with<S>(
    sources: &[S::Source],
    destinations: &[S::Destination],
    strategy: &S,
    options: &SyncOptions,
) -> Result<Vec<SyncOutcome>, SyncError>
where
    S: Strategy,
    S::Destination: Clone,
{
    if sources.is_empty() {
        return Ok(Vec::new());
    }

    let mut snapshot = Cow::Borrowed(destinations);
    let mut outcomes = Vec::with_capacity(sources.len());

    // Sequential on purpose: at most one write in flight, in source order.
    for (index, source) in sources.iter().enumerate() {
        let decision = strategy
            .decide(source, &snapshot)
            .await
            .inspect_err(|e| tracing::warn!(index, error = %e, "synchronization aborted"))?;

        let outcome = decision.outcome();
        tracing::debug!(index, ?outcome, "item synchronized");
        outcomes.push(outcome);

        if options.refresh_after_create
            && let Some(record) = decision.into_record()
        {
            snapshot.to_mut().push(record);
        }
    }

    let created = outcomes.iter().filter(|a| a.is_created()).count();
    tracing::info!(
        total = outcomes.len(),
        created,
        skipped = outcomes.len() - created,
        "synchronization finished"
    );
    Ok(outcomes)
}
