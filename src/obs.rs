//! Feature-gated tracing spans for the flow stages.
//!
//! With the `tracing` feature disabled every helper compiles down to a no-op, so the core
//! stays dependency-free for callers that bring their own instrumentation.

// self
use crate::_prelude::*;

/// Stages of the invocation, in execution order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlowStage {
	/// Assertion signing (CPU-bound, no network).
	Sign,
	/// Token exchange against the authorization server.
	Exchange,
	/// Authenticated search against the instance API.
	Search,
}
impl FlowStage {
	/// Stable label used in span fields.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Sign => "sign",
			Self::Exchange => "exchange",
			Self::Search => "search",
		}
	}
}

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedStage<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedStage<F> = F;

/// A span builder covering one stage of the flow.
#[derive(Clone, Debug)]
pub struct StageSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StageSpan {
	/// Creates a new span tagged with the given stage.
	pub fn new(stage: FlowStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("sfdc_jwt_search.stage", stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> StageSpanGuard {
		#[cfg(feature = "tracing")]
		{
			StageSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			StageSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedStage<Fut>
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

/// RAII guard returned by [`StageSpan::entered`].
pub struct StageSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for StageSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("StageSpanGuard(..)")
	}
}
