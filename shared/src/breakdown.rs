//! Percentage breakdown of the answers recorded for a single question.

use crate::models::{AnswerCount, AnswerShare};

/// Share of `count` in `total`, scaled to 0..=100 and rounded half up.
/// Each bucket is rounded independently, so shares of one question need not
/// sum to exactly 100.
pub fn percentage(count: i64, total: i64) -> u32 {
    if total <= 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// Turns grouped answer counts into shares of their combined total.
/// Answers with no votes are dropped; input order is preserved.
pub fn breakdown(counts: &[AnswerCount]) -> Vec<AnswerShare> {
    let total: i64 = counts.iter().map(|c| c.count).sum();

    counts
        .iter()
        .filter(|c| c.count > 0)
        .map(|c| AnswerShare {
            answer: c.answer.clone(),
            count: c.count,
            percentage: percentage(c.count, total),
        })
        .collect()
}

/// Total number of votes represented by a breakdown.
pub fn total_votes(shares: &[AnswerShare]) -> i64 {
    shares.iter().map(|s| s.count).sum()
}
