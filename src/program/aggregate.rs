use super::types::MeetingRecord;

/// Merges one document's meetings into the combined table by set union
pub fn merge_into(combined: &mut MeetingRecord, document: MeetingRecord) {
    for (date, assigned) in document {
        combined.entry(date).or_default().extend(assigned);
    }
}

/// Folds per-document meetings into one table. Order of documents does not
/// matter since every shared date is merged by union.
pub fn aggregate<I>(documents: I) -> MeetingRecord
where
    I: IntoIterator<Item = MeetingRecord>,
{
    documents.into_iter().fold(MeetingRecord::new(), |mut combined, doc| {
        merge_into(&mut combined, doc);
        combined
    })
}
