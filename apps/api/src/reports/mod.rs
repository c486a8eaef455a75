//! Aggregation/Reporting — read-only statistics over persisted sessions.
//!
//! Pure functions over the stored rows: recomputing from the same data
//! always yields the same report. Zero sessions is a valid input and
//! produces zeroed stats, never an error.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::interview::InterviewRow;

/// Dashboard header numbers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryStats {
    pub total_interviews: usize,
    pub completed_interviews: usize,
    /// Mean of completed sessions' overall scores; 0.0 with no completions.
    pub average_score: f64,
}

/// One point on the performance timeline, in completion order.
#[derive(Debug, Clone, Serialize)]
pub struct TimelinePoint {
    /// 1-based position in the completion sequence.
    pub session: usize,
    pub score: f64,
    pub completed_at: DateTime<Utc>,
}

/// Per-company average, grouped by exact company id.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyAverage {
    pub company: String,
    pub average: f64,
    pub count: usize,
}

/// Full progress view: timeline plus headline deltas.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub timeline: Vec<TimelinePoint>,
    pub latest_score: f64,
    pub average_score: f64,
    /// Last completed score minus first; 0.0 with fewer than two sessions.
    pub improvement: f64,
    pub by_company: Vec<CompanyAverage>,
}

/// Computes dashboard stats over all of a user's sessions (any status).
pub fn summary_stats(interviews: &[InterviewRow]) -> SummaryStats {
    let completed: Vec<f64> = interviews
        .iter()
        .filter(|i| i.is_completed())
        .filter_map(|i| i.overall_score)
        .collect();

    let average_score = if completed.is_empty() {
        0.0
    } else {
        completed.iter().sum::<f64>() / completed.len() as f64
    };

    SummaryStats {
        total_interviews: interviews.len(),
        completed_interviews: completed.len(),
        average_score,
    }
}

/// Builds the progress view. Expects completed sessions with scores,
/// already ordered by completion time ascending.
pub fn progress_report(completed: &[InterviewRow]) -> ProgressReport {
    let timeline: Vec<TimelinePoint> = completed
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let score = row.overall_score?;
            let completed_at = row.completed_at?;
            Some(TimelinePoint {
                session: i + 1,
                score,
                completed_at,
            })
        })
        .collect();

    let latest_score = timeline.last().map(|p| p.score).unwrap_or(0.0);
    let average_score = if timeline.is_empty() {
        0.0
    } else {
        timeline.iter().map(|p| p.score).sum::<f64>() / timeline.len() as f64
    };
    let improvement = match (timeline.first(), timeline.last()) {
        (Some(first), Some(last)) if timeline.len() >= 2 => last.score - first.score,
        _ => 0.0,
    };

    ProgressReport {
        latest_score,
        average_score,
        improvement,
        by_company: company_averages(completed),
        timeline,
    }
}

/// Groups completed sessions by exact company id, in first-seen order.
pub fn company_averages(completed: &[InterviewRow]) -> Vec<CompanyAverage> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();

    for row in completed {
        let score = match row.overall_score {
            Some(s) => s,
            None => continue,
        };
        match groups.iter_mut().find(|(c, _)| *c == row.company) {
            Some((_, scores)) => scores.push(score),
            None => groups.push((row.company.clone(), vec![score])),
        }
    }

    groups
        .into_iter()
        .map(|(company, scores)| CompanyAverage {
            average: scores.iter().sum::<f64>() / scores.len() as f64,
            count: scores.len(),
            company,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interview::{STATUS_COMPLETED, STATUS_IN_PROGRESS};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn completed_row(company: &str, score: f64, day: u32) -> InterviewRow {
        let completed_at = Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap();
        InterviewRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            company: company.to_string(),
            interview_type: "technical".to_string(),
            status: STATUS_COMPLETED.to_string(),
            overall_score: Some(score),
            started_at: completed_at,
            completed_at: Some(completed_at),
        }
    }

    fn in_progress_row(company: &str) -> InterviewRow {
        InterviewRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            company: company.to_string(),
            interview_type: "hr".to_string(),
            status: STATUS_IN_PROGRESS.to_string(),
            overall_score: None,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    #[test]
    fn test_summary_with_no_sessions() {
        let stats = summary_stats(&[]);
        assert_eq!(
            stats,
            SummaryStats {
                total_interviews: 0,
                completed_interviews: 0,
                average_score: 0.0
            }
        );
    }

    #[test]
    fn test_summary_ignores_in_progress_scores() {
        let rows = vec![
            completed_row("google", 80.0, 1),
            completed_row("google", 60.0, 2),
            in_progress_row("amazon"),
        ];
        let stats = summary_stats(&rows);
        assert_eq!(stats.total_interviews, 3);
        assert_eq!(stats.completed_interviews, 2);
        assert!((stats.average_score - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_empty_is_zeroed() {
        let report = progress_report(&[]);
        assert!(report.timeline.is_empty());
        assert_eq!(report.latest_score, 0.0);
        assert_eq!(report.improvement, 0.0);
        assert!(report.by_company.is_empty());
    }

    #[test]
    fn test_timeline_preserves_completion_order() {
        let rows = vec![
            completed_row("google", 50.0, 1),
            completed_row("amazon", 70.0, 5),
            completed_row("google", 90.0, 9),
        ];
        let report = progress_report(&rows);
        let sessions: Vec<usize> = report.timeline.iter().map(|p| p.session).collect();
        assert_eq!(sessions, vec![1, 2, 3]);
        assert_eq!(report.latest_score, 90.0);
    }

    #[test]
    fn test_improvement_is_last_minus_first() {
        let rows = vec![
            completed_row("google", 55.0, 1),
            completed_row("wipro", 60.0, 2),
            completed_row("google", 82.5, 3),
        ];
        let report = progress_report(&rows);
        assert!((report.improvement - 27.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_improvement_needs_two_sessions() {
        let rows = vec![completed_row("google", 88.0, 1)];
        assert_eq!(progress_report(&rows).improvement, 0.0);
    }

    #[test]
    fn test_company_grouping_by_exact_id() {
        let rows = vec![
            completed_row("google", 80.0, 1),
            completed_row("amazon", 40.0, 2),
            completed_row("google", 60.0, 3),
        ];
        let averages = company_averages(&rows);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].company, "google");
        assert!((averages[0].average - 70.0).abs() < f64::EPSILON);
        assert_eq!(averages[0].count, 2);
        assert_eq!(averages[1].company, "amazon");
        assert_eq!(averages[1].count, 1);
    }

    #[test]
    fn test_report_idempotent_over_same_rows() {
        let rows = vec![
            completed_row("google", 64.0, 1),
            completed_row("infosys", 72.0, 2),
        ];
        let a = progress_report(&rows);
        let b = progress_report(&rows);
        assert_eq!(a.average_score, b.average_score);
        assert_eq!(a.improvement, b.improvement);
    }
}
