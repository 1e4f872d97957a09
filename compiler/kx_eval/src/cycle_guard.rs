//! Reference-cycle detection for symbol expansion.
//!
//! The guard is a stack of the ids currently being expanded. Entering an id
//! that is already on the stack is a cycle: the stack is cleared and the
//! caller yields [`Value::Unknown`](crate::Value::Unknown) for that reference.
//! Clearing everything (not just the cycle) means a later reference to an
//! unrelated id in a sibling branch is expanded again from scratch.
//!
//! The cleared ids are remembered until [`CycleGuard::settle`], so a sibling
//! that re-enters one of them (`{b, a}` inside `a`) is also a cycle instead of
//! expanding the same loop again.

/// Outcome of [`CycleGuard::enter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Entry {
    /// The id was pushed; pair with [`CycleGuard::exit`].
    Entered,
    /// The id was already being expanded.
    Cycle,
}

#[derive(Clone, Debug, Default)]
pub struct CycleGuard {
    stack: Vec<String>,
    /// Ids that were open when a cycle cleared the stack.
    cycled: Vec<String>,
}

impl CycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, id: &str) -> Entry {
        let seen = |ids: &[String]| ids.iter().any(|open| open == id);
        if seen(&self.stack) || seen(&self.cycled) {
            tracing::trace!(id, depth = self.stack.len(), "reference cycle");
            self.cycled.append(&mut self.stack);
            Entry::Cycle
        } else {
            self.stack.push(id.to_owned());
            Entry::Entered
        }
    }

    /// Pop `id` if it is the innermost open expansion.
    ///
    /// A no-op after a cycle cleared the stack.
    pub fn exit(&mut self, id: &str) {
        if self.stack.last().is_some_and(|top| top == id) {
            self.stack.pop();
        }
    }

    pub fn is_clear(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Forget the ids of earlier cycles once the outermost expansion is done.
    pub fn settle(&mut self) {
        self.cycled.clear();
    }
}
