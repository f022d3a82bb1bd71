// Callback protocol used while enumerating stems and suggestion candidates

use bdic_core::Flow;

/// Receives the results of affix rule application and suggestion generation.
///
/// The dictionary drives the enumeration and calls back for every stem or
/// candidate it produces. Returning [`Flow::Stop`] aborts the enumeration:
/// no further rules are tried and the `Stop` is passed up to the caller.
pub trait RuleListener {
    /// Called when an affix rule yields `stem` for the rule set `flag`.
    fn handle_match(&mut self, stem: &str, flag: &str) -> Flow;

    /// Called for each suggestion candidate.
    fn handle_suggestion(&mut self, candidate: &str) -> Flow {
        let _ = candidate;
        Flow::Continue
    }
}
