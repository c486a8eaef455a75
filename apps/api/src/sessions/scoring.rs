//! Session-level score derivation.
//!
//! A completed session's overall score is the arithmetic mean of its
//! persisted per-answer scores (each already 0-100). Pure function of the
//! stored rows, so recomputing from the same answers always yields the
//! same value.

/// Mean of per-answer scores. `None` for an empty slice — a session with
/// no answers has no score.
pub fn session_overall_score(answer_scores: &[i32]) -> Option<f64> {
    if answer_scores.is_empty() {
        return None;
    }
    let sum: i64 = answer_scores.iter().map(|&s| i64::from(s)).sum();
    Some(sum as f64 / answer_scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_three_answers() {
        assert_eq!(session_overall_score(&[60, 80, 100]), Some(80.0));
    }

    #[test]
    fn test_single_answer_is_its_own_mean() {
        assert_eq!(session_overall_score(&[70]), Some(70.0));
    }

    #[test]
    fn test_empty_session_has_no_score() {
        assert_eq!(session_overall_score(&[]), None);
    }

    #[test]
    fn test_non_integer_mean() {
        let score = session_overall_score(&[70, 75]).unwrap();
        assert!((score - 72.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_idempotent_over_same_rows() {
        let scores = [55, 90, 72, 68, 81];
        assert_eq!(
            session_overall_score(&scores),
            session_overall_score(&scores)
        );
    }
}
