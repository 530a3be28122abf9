/// Failure classification for one target's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection-level failure: refusal, reset, timeout.
    Transport,
    /// Body failed strict decoding.
    Parse,
}

/// The mutually exclusive outcome of fetching one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A response arrived. Any HTTP status counts; non-2xx is recorded
    /// verbatim, not treated as failure at this layer.
    Body { status: u16, bytes: Vec<u8> },
    /// The request never produced a response.
    Transport { message: String },
    /// A response arrived but its body failed strict decoding.
    Parse { status: u16, message: String },
}

/// Outcome of fetching one [`TargetSpec`](super::TargetSpec).
///
/// Written exactly once by the task that owns the target; never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub index: usize,
    pub outcome: FetchOutcome,
}

impl FetchResult {
    /// HTTP status code, absent on transport failure.
    pub fn status(&self) -> Option<u16> {
        match &self.outcome {
            FetchOutcome::Body { status, .. } | FetchOutcome::Parse { status, .. } => Some(*status),
            FetchOutcome::Transport { .. } => None,
        }
    }

    /// Response body, absent when the slot records an error.
    pub fn body(&self) -> Option<&[u8]> {
        match &self.outcome {
            FetchOutcome::Body { bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match &self.outcome {
            FetchOutcome::Body { .. } => None,
            FetchOutcome::Transport { .. } => Some(ErrorKind::Transport),
            FetchOutcome::Parse { .. } => Some(ErrorKind::Parse),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Body { .. })
    }
}

/// The complete, index-ordered collection of results for one fan-out call.
///
/// Length always equals the number of submitted targets. For a freshly
/// parsed list the entry at position `i` carries index `i`; a resubmitted
/// subset keeps its original indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet(Vec<FetchResult>);

impl ResultSet {
    pub(crate) fn new(results: Vec<FetchResult>) -> Self {
        Self(results)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FetchResult> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FetchResult> {
        self.0.iter()
    }

    /// Indices whose slots record an error. Retry is a caller concern:
    /// resubmit only these targets if desired.
    pub fn failed_indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .filter(|r| r.error().is_some())
            .map(|r| r.index)
            .collect()
    }

    pub fn into_inner(self) -> Vec<FetchResult> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FetchResult;
    type IntoIter = std::slice::Iter<'a, FetchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
