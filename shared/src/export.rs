//! Browser-local export of a draft.

pub const DRAFT_MIME_TYPE: &str = "text/markdown";

/// File name for a downloaded draft, stamped with the export time.
pub fn draft_file_name(epoch_millis: u64) -> String {
    format!("draft-{epoch_millis}.md")
}

#[cfg(test)]
mod tests {
    use super::draft_file_name;

    #[test]
    fn file_name_carries_timestamp() {
        assert_eq!(draft_file_name(1_704_067_200_000), "draft-1704067200000.md");
    }
}
