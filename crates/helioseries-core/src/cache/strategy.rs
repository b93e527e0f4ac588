//! Fetch-window expansion strategies.

use serde::{Deserialize, Serialize};

use crate::interval::TimeRange;

/// Default tolerance fraction applied on each side of a requested window.
pub const DEFAULT_TOLERANCE: f64 = 0.2;

/// What a variable should actually fetch for one requested window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchPlan {
    /// The window the caller asked for.
    pub primary: TimeRange,
    /// The tolerance-expanded window to hand to the provider.
    pub expanded: TimeRange,
}

/// Policy deciding how far a requested window is over-extended.
///
/// Configuration value: the settings layer deserializes it alongside the
/// rest of the application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FetchStrategy {
    /// Expand symmetrically by `tolerance * width` on each side.
    SingleThreshold {
        /// Fraction of the requested width added before the start and after
        /// the end. Negative values are treated as zero.
        tolerance: f64,
    },
    /// Recognized but unimplemented variant with distinct pan-ahead and
    /// pan-behind thresholds. Planning with it logs an error and falls back
    /// to the unexpanded request.
    TwoThreshold,
}

impl FetchStrategy {
    /// Compute the fetch plan for one requested window.
    ///
    /// The expansion never shrinks the request: `expanded.start <=
    /// primary.start` and `expanded.end >= primary.end` hold for every
    /// strategy and tolerance.
    pub fn fetch_plan(&self, requested: TimeRange) -> FetchPlan {
        match *self {
            FetchStrategy::SingleThreshold { tolerance } => {
                let margin = (tolerance * requested.width()).max(0.0);
                FetchPlan {
                    primary: requested,
                    expanded: requested.expanded(margin, margin),
                }
            }
            FetchStrategy::TwoThreshold => {
                log::error!(
                    "two-threshold fetch strategy is not implemented; \
                     using the requested range unexpanded"
                );
                FetchPlan {
                    primary: requested,
                    expanded: requested,
                }
            }
        }
    }
}

impl Default for FetchStrategy {
    fn default() -> Self {
        FetchStrategy::SingleThreshold {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_threshold_expands_symmetrically() {
        let strategy = FetchStrategy::SingleThreshold { tolerance: 0.5 };
        let plan = strategy.fetch_plan(TimeRange::new(100.0, 200.0));

        assert_eq!(plan.primary, TimeRange::new(100.0, 200.0));
        assert_eq!(plan.expanded, TimeRange::new(50.0, 250.0));
    }

    #[test]
    fn expansion_is_monotone_for_any_tolerance() {
        let requested = TimeRange::new(100.0, 200.0);
        for tolerance in [0.0, 0.2, 1.0, 10.0, -3.0, f64::NAN] {
            let plan = FetchStrategy::SingleThreshold { tolerance }.fetch_plan(requested);
            assert!(plan.expanded.start() <= requested.start());
            assert!(plan.expanded.end() >= requested.end());
        }
    }

    #[test]
    fn two_threshold_falls_back_to_the_request() {
        let requested = TimeRange::new(100.0, 200.0);
        let plan = FetchStrategy::TwoThreshold.fetch_plan(requested);
        assert_eq!(plan.primary, requested);
        assert_eq!(plan.expanded, requested);
    }

    #[test]
    fn strategy_round_trips_through_configuration() {
        let json = serde_json::to_string(&FetchStrategy::default()).unwrap();
        let back: FetchStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FetchStrategy::default());
    }
}
