/// Gate decision for a scored run.
///
/// The polarity is deliberate: the composite score measures risk, so a
/// *high* score fails the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Pass { score: f64, threshold: f64 },
    Fail { score: f64, threshold: f64 },
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass { .. })
    }

    pub fn outcome(&self) -> RunOutcome {
        match self {
            Verdict::Pass { .. } => RunOutcome::Success,
            Verdict::Fail { .. } => RunOutcome::Fail,
        }
    }
}

/// Terminal outcome of a whole run, including the short-circuit paths
/// (no changes, everything filtered) and the error path.
///
/// This is the structured result the library exposes; the literal
/// `RESULT:` line exists only at the process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Fail,
}

impl RunOutcome {
    /// The machine-parseable protocol line. Always the final line of
    /// stdout so a wrapping process can scan for it from the end.
    pub fn protocol_line(&self) -> &'static str {
        match self {
            RunOutcome::Success => "RESULT:success",
            RunOutcome::Fail => "RESULT:fail",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::Fail => 1,
        }
    }
}
