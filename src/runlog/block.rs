//! Splitting raw run output into blank-line separated blocks.

/// Split a run log into blocks separated by one blank line.
///
/// The whole content is trimmed before splitting and CRLF line endings are
/// normalized first, so the same text always yields the same blocks.
///
/// Example:
/// "np=2\nTotal execution time: 1.5\n\nnp=4\n..."  =>  ["np=2\nTotal...", "np=4\n..."]
pub fn split_blocks(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n");
    normalized
        .trim()
        .split("\n\n")
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_line() {
        let text = "np=2\nTotal execution time: 1.50\n\nnp=4\nTotal execution time: 0.80\n";
        assert_eq!(
            split_blocks(text),
            vec![
                "np=2\nTotal execution time: 1.50".to_string(),
                "np=4\nTotal execution time: 0.80".to_string(),
            ]
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let blocks = split_blocks("\n\n  preamble\n\nnp=2\n\n\n");
        assert_eq!(blocks, vec!["preamble".to_string(), "np=2".to_string()]);
    }

    #[test]
    fn splitting_is_repeatable() {
        let text = "a\nb\n\nc\n\n\nd";
        assert_eq!(split_blocks(text), split_blocks(text));
        // A second blank line leaves a leading newline on the next block.
        assert_eq!(split_blocks(text)[2], "\nd");
    }

    #[test]
    fn crlf_content_splits_like_lf() {
        assert_eq!(split_blocks("a\r\n\r\nb"), split_blocks("a\n\nb"));
    }

    #[test]
    fn empty_content_is_one_empty_block() {
        assert_eq!(split_blocks("   \n"), vec![String::new()]);
    }
}
