/// Part to be packed.
///
/// During a solve a part is identified by its index in the instance;
/// the `id` is only carried through for the final report.
#[derive(Clone, Debug)]
pub struct Part {
    /// Unique identifier of the part within its instance
    pub id: String,
    /// Room the part takes up in the suitcase
    pub volume: usize,
    pub value: u64,
}

impl Part {
    pub fn new(id: String, volume: usize, value: u64) -> Part {
        Part { id, volume, value }
    }
}
