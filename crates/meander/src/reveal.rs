//! Staged reveal scheduling.
//!
//! When a canvas gets a fresh node list, nodes fade in one per tick in
//! sequence order, and connectors follow one per tick once at least two
//! nodes are visible. This module owns that timing state as an explicit
//! state machine: [`RevealSchedule::advance`] performs one tick, and any
//! scheduling mechanism - a timer, an animation-frame callback, a test
//! loop - can drive it. [`TickDriver`] converts wall-clock time into
//! ticks at a fixed interval for callers that want one.
//!
//! Reveal state is presentation-only: it gates which already-computed
//! placements and connectors are eligible to render and never affects
//! layout correctness.

use std::time::{Duration, Instant};

use log::debug;

/// Reveal counters for one canvas generation.
///
/// `nodes_revealed` climbs from 0 to the node count; once more than one
/// node is visible, `connectors_revealed` climbs from 0 to
/// `node_count - 1`. Both are monotonic between resets and the invariant
/// `connectors_revealed <= max(0, nodes_revealed - 1)` holds at every
/// tick boundary.
///
/// Replacing the node list must go through [`restart`](Self::restart),
/// which zeroes both counters and bumps the generation token so callers
/// can discard ticks scheduled against the old list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSchedule {
    node_count: usize,
    nodes_revealed: usize,
    connectors_revealed: usize,
    generation: u64,
}

impl RevealSchedule {
    /// Creates a schedule for `node_count` nodes with nothing revealed.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            nodes_revealed: 0,
            connectors_revealed: 0,
            generation: 0,
        }
    }

    /// Performs one tick, returning whether any counter moved.
    ///
    /// Both counters are evaluated against the pre-tick state: the next
    /// node is revealed while any remain, and in the same tick the next
    /// connector is revealed if more than one node was already visible
    /// and connectors are trailing. At the terminal state
    /// (`nodes_revealed == node_count`,
    /// `connectors_revealed == max(0, node_count - 1)`) ticks are no-ops.
    pub fn advance(&mut self) -> bool {
        let nodes_before = self.nodes_revealed;
        let mut changed = false;

        if self.nodes_revealed < self.node_count {
            self.nodes_revealed += 1;
            changed = true;
        }
        if nodes_before > 1 && self.connectors_revealed < nodes_before - 1 {
            self.connectors_revealed += 1;
            changed = true;
        }

        changed
    }

    /// Resets the schedule for a replacement node list.
    ///
    /// Both counters return to zero regardless of prior progress, and the
    /// generation token is bumped; a tick captured before the restart
    /// compares unequal and must be dropped by the caller.
    pub fn restart(&mut self, node_count: usize) {
        debug!(node_count, generation = self.generation + 1; "Restarting reveal schedule");
        self.node_count = node_count;
        self.nodes_revealed = 0;
        self.connectors_revealed = 0;
        self.generation += 1;
    }

    /// Adopts a grown node list, revealing everything but the newest
    /// node and connector.
    ///
    /// Used when a node is appended interactively: the existing canvas
    /// stays visible and only the appended node (and its connector)
    /// animate in on the following ticks. The generation token is not
    /// bumped - pending ticks remain valid and finish the reveal.
    pub fn catch_up(&mut self, node_count: usize) {
        self.node_count = node_count;
        self.nodes_revealed = node_count.saturating_sub(1);
        self.connectors_revealed = node_count.saturating_sub(2);
    }

    /// Returns the number of nodes currently eligible to render.
    pub fn nodes_revealed(&self) -> usize {
        self.nodes_revealed
    }

    /// Returns the number of connectors currently eligible to render.
    pub fn connectors_revealed(&self) -> usize {
        self.connectors_revealed
    }

    /// Returns the node count this schedule is driving toward.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the terminal connector count, `max(0, node_count - 1)`.
    pub fn connector_count(&self) -> usize {
        self.node_count.saturating_sub(1)
    }

    /// Returns the generation token, bumped on every [`restart`](Self::restart).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true once every node and connector is revealed.
    pub fn is_complete(&self) -> bool {
        self.nodes_revealed == self.node_count
            && self.connectors_revealed == self.connector_count()
    }
}

/// Converts wall-clock time into [`RevealSchedule`] ticks at a fixed
/// interval.
///
/// The driver never reads a clock itself; callers pass `now` into
/// [`poll`](Self::poll), so tests drive time synchronously and
/// production callers poll from whatever loop they already run.
#[derive(Debug, Clone)]
pub struct TickDriver {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl TickDriver {
    /// The reveal cadence: one node or connector per 150ms.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(150);

    /// Creates a driver with the given tick interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Applies every whole interval elapsed up to `now`, returning the
    /// number of ticks that changed the schedule.
    ///
    /// The first poll only anchors the phase; partial intervals carry
    /// over to the next poll rather than being discarded.
    pub fn poll(&mut self, now: Instant, schedule: &mut RevealSchedule) -> usize {
        let Some(mut last) = self.last_tick else {
            self.last_tick = Some(now);
            return 0;
        };

        let mut applied = 0;
        while now.duration_since(last) >= self.interval {
            last += self.interval;
            if schedule.advance() {
                applied += 1;
            }
        }
        self.last_tick = Some(last);
        applied
    }

    /// Clears the tick phase; the next poll re-anchors it.
    ///
    /// Call alongside [`RevealSchedule::restart`] so the first tick of a
    /// new generation gets a full interval.
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
