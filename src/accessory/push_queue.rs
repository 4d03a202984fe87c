// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-slot, latest-wins push queue.
//!
//! Every accepted host write bumps a revision counter on a `watch` channel.
//! One worker task waits for the counter to move, snapshots the *current*
//! device state and pushes it. Writes that land while a push is in flight
//! collapse into a single follow-up push, so POSTs never overlap and never
//! arrive out of order.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::protocol::Protocol;

use super::Shared;

/// Handle used by the accessory to request a push.
///
/// Dropping the handle stops the worker once any pending push has been sent.
#[derive(Debug)]
pub(crate) struct PushQueue {
    revision: watch::Sender<u64>,
}

impl PushQueue {
    /// Spawns the push worker on `runtime`.
    pub(crate) fn spawn<P: Protocol>(runtime: &Handle, shared: Arc<Shared<P>>) -> Self {
        let (revision, receiver) = watch::channel(0);
        runtime.spawn(run(shared, receiver));
        Self { revision }
    }

    /// Requests that the current state be pushed.
    ///
    /// Never blocks; superseded requests are coalesced.
    pub(crate) fn request(&self) {
        self.revision.send_modify(|r| *r = r.wrapping_add(1));
    }
}

async fn run<P: Protocol>(shared: Arc<Shared<P>>, mut revisions: watch::Receiver<u64>) {
    while revisions.changed().await.is_ok() {
        let revision = *revisions.borrow_and_update();
        let snapshot = shared.state.read().clone();

        match shared.protocol.push(&snapshot).await {
            Ok(()) => tracing::debug!(revision, "State pushed"),
            Err(e) => tracing::warn!(revision, error = %e, "Failed to push state"),
        }
    }

    tracing::debug!(name = %shared.information.name, "Push worker stopped");
}
