// self
use crate::obs::{HookKind, HookOutcome};

/// Records a hook outcome via the global metrics recorder (when enabled).
pub fn record_hook_outcome(kind: HookKind, outcome: HookOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"discord_strategy_hook_total",
			"hook" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
