//! CPU client and its configuration

use std::borrow::Cow;

use log::warn;

use crate::dtype::SparseIndex;
use crate::sparse::{SparseFormat, SparseStorage, SparsityPattern};

/// Configuration for [`CpuClient`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Minimum number of patterns handed to one rayon task in batch
    /// operations (ignored without the `rayon` feature)
    pub parallel_min_len: usize,
    /// Emit a `warn!` when an input has to be converted to another
    /// orientation before an operation can run
    pub warn_on_conversion: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            parallel_min_len: 1,
            warn_on_conversion: true,
        }
    }
}

/// CPU client for operation dispatch
///
/// Checks shapes, normalizes orientation, and runs the graph algorithms. The
/// client holds configuration only, so it is cheap to clone and share across
/// threads.
#[derive(Clone, Debug, Default)]
pub struct CpuClient {
    config: ClientConfig,
}

impl CpuClient {
    /// Create a CPU client with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CPU client with an explicit configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Returns the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(feature = "rayon")]
    pub(crate) fn rayon_min_len(&self) -> usize {
        self.config.parallel_min_len.max(1)
    }

    /// Borrow `pattern` if it already has `format`, otherwise convert it.
    pub(crate) fn oriented<'p, I: SparseIndex>(
        &self,
        pattern: &'p SparsityPattern<I>,
        format: SparseFormat,
        op: &'static str,
    ) -> Cow<'p, SparsityPattern<I>> {
        if pattern.format() == format {
            return Cow::Borrowed(pattern);
        }
        if self.config.warn_on_conversion {
            warn!(
                "{}: converting {} input to {} for efficiency; pass {} to avoid the copy",
                op,
                pattern.format(),
                format,
                format
            );
        }
        Cow::Owned(match format {
            SparseFormat::Csc => pattern.to_csc(),
            _ => pattern.to_csr(),
        })
    }
}
