//! State entity and aggregate statistics

/// Store-assigned state identifier
pub type StateId = i64;

/// A state row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub population: i64,
}

/// Counters summed across every district of one state
///
/// Never persisted. A state without districts has all totals at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateStats {
    pub total_cases: i64,
    pub total_cured: i64,
    pub total_active: i64,
    pub total_deaths: i64,
}
