/// Which arithmetic an evaluation is carried out in. One evaluation never mixes the two.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ArithmeticPolicy {
    /// 64-bit floating point. Integer literals widen to float, division never fails.
    #[default]
    Float,
    /// 64-bit signed integers. Division truncates toward zero, decimal literals are rejected.
    Integer,
}

/// Settings for a single run through the tokenize, convert, evaluate pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub policy: ArithmeticPolicy,
    /// Extension: skip ASCII whitespace between tokens. Off by default, in which
    /// case any whitespace makes tokenizing fail.
    pub skip_whitespace: bool,
}

impl Options {
    pub fn with_policy(mut self, policy: ArithmeticPolicy) -> Options {
        self.policy = policy;
        self
    }

    pub fn with_whitespace_skipping(mut self, skip_whitespace: bool) -> Options {
        self.skip_whitespace = skip_whitespace;
        self
    }
}
