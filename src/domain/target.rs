/// One URL to fetch, plus its stable position in the seed list.
///
/// The index is assigned at list-parse time and never changes; it is the
/// address of this target's slot in the final [`ResultSet`](super::ResultSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub index: usize,
    pub url: String,
}

impl TargetSpec {
    pub fn new(index: usize, url: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
        }
    }
}
