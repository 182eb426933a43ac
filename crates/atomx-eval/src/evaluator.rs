//! Pipeline orchestration: environment, lexing, evaluation.

use atomx_env::{Context, Universe};
use atomx_lexer::{Lexer, TokenStream};
use atomx_parser::Parser;
use atomx_types::log::targets;
use atomx_types::{DiagnosticSink, EvalOptions, LogSink, Result};

/// Tokenize `expression`, binding every label to its truth value in
/// `context` and its canonical label in `universe`.
pub fn tokenize(expression: &str, context: &Context, universe: &Universe) -> Result<TokenStream> {
    Lexer::new(expression, context, universe).lex_stream()
}

/// Evaluates expressions with fixed options, reporting validation warnings
/// to a [`DiagnosticSink`].
///
/// Each call builds and owns its universe and context; nothing is shared
/// between calls.
#[derive(Debug, Clone, Default)]
pub struct Evaluator<S = LogSink> {
    options: EvalOptions,
    sink: S,
}

impl Evaluator<LogSink> {
    /// Default options, warnings go to `log::warn!`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: DiagnosticSink> Evaluator<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            options: EvalOptions::default(),
            sink,
        }
    }

    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Build the universe from `universe` and the expanded context from
    /// `context`, then evaluate `expression` against them.
    pub fn evaluate<C, P, L, I>(&mut self, expression: &str, context: C, universe: P) -> Result<bool>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        P: IntoIterator<Item = (L, I)>,
        L: AsRef<str>,
        I: AsRef<str>,
    {
        let universe = Universe::from_pairs(universe, &mut self.sink);
        let context = Context::expand(context, &universe, &mut self.sink);
        self.evaluate_in(expression, &context, &universe)
    }

    /// Evaluate `expression` against an already built environment.
    pub fn evaluate_in(
        &self,
        expression: &str,
        context: &Context,
        universe: &Universe,
    ) -> Result<bool> {
        let tokens = tokenize(expression, context, universe)?;
        let value = Parser::with_options(tokens, self.options).evaluate()?;
        log::debug!(target: targets::EVAL, "{expression:?} evaluated to {value}");
        Ok(value)
    }
}
