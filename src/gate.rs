//! Threshold gate.

use crate::models::Verdict;

/// Compare the composite risk score against the threshold.
///
/// A *high* score fails: the composite measures risk/change volume, not
/// quality. The comparison is boundary-inclusive on the fail side.
pub fn decide(risk_score: f64, threshold: f64) -> Verdict {
    if risk_score >= threshold {
        Verdict::Fail {
            score: risk_score,
            threshold,
        }
    } else {
        Verdict::Pass {
            score: risk_score,
            threshold,
        }
    }
}
