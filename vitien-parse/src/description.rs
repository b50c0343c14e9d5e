//! Residual description: what remains of a line once the structured pieces
//! are cut out.

use std::ops::Range;

/// Remove the matched indicator/date/amount spans from the normalized line,
/// then parentheses, then collapse whitespace.
///
/// Spans are cut by byte range, not string replace — an unrelated occurrence
/// of the same digits elsewhere in the line must survive. `loose_text`
/// carries a fallback amount phrase that matched the raw line rather than
/// the normalized one; it is removed by first occurrence when still present.
pub fn derive(normalized: &str, mut spans: Vec<Range<usize>>, loose_text: Option<&str>) -> String {
    let mut out = normalized.to_string();

    spans.sort_by(|a, b| b.start.cmp(&a.start));
    let mut cut_from = out.len() + 1;
    for span in spans {
        if span.end > cut_from {
            continue;
        }
        cut_from = span.start;
        out.replace_range(span, " ");
    }

    if let Some(text) = loose_text {
        if let Some(at) = out.find(text) {
            out.replace_range(at..at + text.len(), " ");
        }
    }

    let out = out.replace(['(', ')'], " ");
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuts_span_not_every_occurrence() {
        // Only the first "50000" is the amount; the second must survive.
        let text = "chi 50000 gửi 50000 lần nữa";
        let out = derive(text, vec![0..3, 4..9], None);
        assert_eq!(out, "gửi 50000 lần nữa");
    }

    #[test]
    fn test_strips_parentheses() {
        let out = derive("ăn sáng (với bạn)", vec![], None);
        assert_eq!(out, "ăn sáng với bạn");
    }

    #[test]
    fn test_collapses_whitespace() {
        let out = derive("chi   50000   ăn sáng", vec![0..3, 6..11], None);
        assert_eq!(out, "ăn sáng");
    }

    #[test]
    fn test_overlapping_spans_applied_once() {
        let text = "chi mua sữa";
        // 0..5 overlaps the already-cut 4..7 and must be skipped.
        let out = derive(text, vec![0..5, 4..7], None);
        assert_eq!(out, "chi sữa");
    }

    #[test]
    fn test_loose_text_removed_by_occurrence() {
        let out = derive("năm mươi nghìn tiền ăn", vec![], Some("năm mươi nghìn"));
        assert_eq!(out, "tiền ăn");
    }

    #[test]
    fn test_empty_result_is_legitimate() {
        let out = derive("50000", vec![0..5], None);
        assert_eq!(out, "");
    }
}
