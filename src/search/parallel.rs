//! Concurrent enumeration of every solution
//!
//! The outermost search level is fanned out: one thread per (anchor,
//! orientation) pair of the last pool entry, each owning a private copy of
//! the occupancy grid. Deeper levels are not re-parallelized, which bounds
//! the number of running branches to anchors x orientations. The only
//! shared resource is a zero-capacity channel: producers block until the
//! consumer takes each solution, and the stream closes once the last branch
//! finishes and drops its sender.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use crate::board::session::{Move, Session};
use crate::geometry::Position;
use crate::io::error::SolverError;
use crate::pieces::catalog::Piece;
use crate::pieces::orientation::precompute;
use crate::search::sequential::{enumerate_solutions, scan_order};

/// Lazy stream of complete tilings produced by [`solve_all`]
///
/// Iteration blocks until the next solution arrives and ends after every
/// concurrent branch has finished; the stream may be empty. The rendezvous
/// channel underneath means the consumer must keep draining, or every
/// producing branch stalls on its next solution.
#[derive(Debug)]
pub struct SolutionStream {
    receiver: Receiver<Vec<Move>>,
}

impl Iterator for SolutionStream {
    type Item = Vec<Move>;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.recv().ok()
    }
}

/// Enumerate every tiling of the session's board by the pool, concurrently
///
/// The last pool entry is fanned out over every (row-major anchor,
/// orientation) pair. Branches whose initial placement is rejected finish
/// without output; the rest run the sequential enumeration over the
/// remaining pool against their private board copy. An empty pool yields an
/// immediately closed, empty stream.
///
/// Dropping the stream early does not cancel the search: branches explore
/// their full subtree regardless and discard solutions nobody receives.
///
/// A placement error inside a branch means the pool/board sizing invariant
/// was broken before the fan-out. The offending branch panics and a
/// coordinator thread escalates the failure to a process abort; it is
/// never recovered per branch or reported as a clean empty stream.
pub fn solve_all(session: &Session, pool: &[Piece]) -> SolutionStream {
    let (sender, receiver) = mpsc::sync_channel(0);
    let orientation_sets = precompute(pool);

    let mut branches = Vec::new();
    if let Some((fanned, remaining)) = orientation_sets.split_last() {
        for anchor in scan_order() {
            for orientation in fanned {
                let mut branch = session.branch();
                let orientation = orientation.clone();
                let remaining = remaining.to_vec();
                let sender = sender.clone();
                branches.push(thread::spawn(move || {
                    run_branch(&mut branch, &orientation, anchor, &remaining, &sender);
                }));
            }
        }
    }

    // Each branch signals completion by dropping its sender clone; the
    // receiver observes end-of-stream only after the last one is gone.
    // The coordinator joins every branch so a panicked branch takes the
    // process down instead of being recovered as a shorter stream.
    drop(thread::spawn(move || {
        for branch in branches {
            if branch.join().is_err() {
                std::process::abort();
            }
        }
    }));

    SolutionStream { receiver }
}

fn run_branch(
    branch: &mut Session,
    orientation: &Piece,
    anchor: Position,
    remaining: &[Vec<Piece>],
    sender: &SyncSender<Vec<Move>>,
) {
    match branch.attempt(orientation, anchor) {
        Ok(true) => {}
        // Rejected first placements are expected near the board edges;
        // the branch simply has nothing to explore.
        Ok(false) => return,
        Err(error) => branch_failure(&error),
    }

    let result = enumerate_solutions(branch, remaining, &mut |solution| {
        // A send only fails once the consumer is gone; the solution has
        // nowhere to go and is dropped.
        let _ = sender.send(solution);
    });
    if let Err(error) = result {
        branch_failure(&error);
    }
}

// Branch state is private to its thread, so a placement error cannot be a
// race; it means the pool/board sizing invariant was broken before the
// fan-out, which no branch can recover from.
#[allow(clippy::panic)]
fn branch_failure(error: &SolverError) -> ! {
    panic!("invariant violation in search branch: {error}");
}
