// self
use crate::{_prelude::*, obs::HookKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedHook<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedHook<F> = F;

/// A span builder used by strategy hooks.
#[derive(Clone, Debug)]
pub struct HookSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl HookSpan {
	/// Creates a new span tagged with the provided hook kind + stage.
	pub fn new(kind: HookKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("discord_strategy.hook", hook = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> HookSpanGuard {
		#[cfg(feature = "tracing")]
		{
			HookSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			HookSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedHook<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`HookSpan::entered`].
pub struct HookSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for HookSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("HookSpanGuard(..)")
	}
}
