use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out tickets so that only the most recently started operation counts.
///
/// Every [`issue`](LatestGate::issue) supersedes all earlier tickets. An async
/// task holds its ticket across the await and checks [`Ticket::is_current`]
/// before acting on the result.
#[derive(Clone, Debug, Default)]
pub struct LatestGate {
    generation: Arc<AtomicU64>,
}

impl LatestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            gate: self.generation.clone(),
            generation,
        }
    }

    /// Supersede every outstanding ticket without starting anything new.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for LatestGate {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.generation, &other.generation)
    }
}

#[derive(Clone, Debug)]
pub struct Ticket {
    gate: Arc<AtomicU64>,
    generation: u64,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.gate.load(Ordering::SeqCst) == self.generation
    }
}
