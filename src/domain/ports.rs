use crate::domain::model::Record;

pub trait RecordSource {
    fn records(&self) -> &[Record];

    /// First record whose id equals `id`, scanning in insertion order.
    fn find_by_id(&self, id: i64) -> Option<&Record> {
        let found = self.records().iter().find(|record| record.id == id);
        tracing::debug!(id, found = found.is_some(), "record lookup");
        found
    }
}
