use std::path::PathBuf;

use crate::lowering::LoweringOptions;

/// One lowering invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowerRequest {
    pub input: PathBuf,
    pub options: LoweringOptions,
}

impl LowerRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            options: LoweringOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: LoweringOptions) -> Self {
        self.options = options;
        self
    }
}
