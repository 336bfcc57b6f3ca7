//! Synchronizer configuration.
//!
//! [`SyncConfig`] carries the two policies a synchronizer consults while
//! attaching and propagating. The defaults give the plain behavior: default
//! to the first candidate, forward any value without complaint.

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// What a single-selection synchronizer does with an unset cell at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialPolicy {
    /// Set the cell to the first candidate, if there is one.
    #[default]
    FirstCandidate,
    /// Leave the cell unset.
    LeaveUnset,
}

/// How values that are not among the candidates are treated when pushed
/// into a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MembershipPolicy {
    /// Forward silently; the control decides what to show.
    #[default]
    Permissive,
    /// Forward, but log a warning.
    Warn,
}

// ---------------------------------------------------------------------------
// SyncConfig
// ---------------------------------------------------------------------------

/// Configuration for selection synchronizers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncConfig {
    /// Initialization of an unset single-selection cell.
    pub initial: InitialPolicy,
    /// Treatment of non-candidate values.
    pub membership: MembershipPolicy,
}

impl SyncConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initialization policy (builder).
    pub fn with_initial(mut self, initial: InitialPolicy) -> Self {
        self.initial = initial;
        self
    }

    /// Set the membership policy (builder).
    pub fn with_membership(mut self, membership: MembershipPolicy) -> Self {
        self.membership = membership;
        self
    }
}
