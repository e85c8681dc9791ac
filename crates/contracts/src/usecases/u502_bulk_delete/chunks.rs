use crate::domain::common::RecordId;

/// Splits ids into sequential request batches, keeping selection order
pub fn chunk_ids(ids: &[RecordId], size: usize) -> Vec<Vec<RecordId>> {
    ids.chunks(size.max(1)).map(<[RecordId]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_batch_holds_the_rest() {
        let ids: Vec<RecordId> = (1..=4500).collect();
        let batches = chunk_ids(&ids, 2000);
        assert_eq!(batches.iter().map(Vec::len).collect::<Vec<_>>(), vec![2000, 2000, 500]);
        assert_eq!(batches[1][0], 2001);
    }

    #[test]
    fn empty_selection_sends_nothing() {
        assert!(chunk_ids(&[], 1000).is_empty());
    }
}
