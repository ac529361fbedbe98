#[cfg(test)]
mod tests {
    use super::super::{aggregate_contributions, compute_stats, heatmap_window, Contribution};
    use chrono::NaiveDate;
    use habitdeck_domain::habit::{ActionType, Frequency, Habit, Measurement};
    use habitdeck_domain::shared::HabitId;
    use std::collections::BTreeMap;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn contribution(d: &str, count: u32) -> Contribution {
        Contribution {
            date: date(d),
            count,
        }
    }

    fn habit_with(progress: &[(&str, u32)]) -> Habit {
        let progress: BTreeMap<NaiveDate, u32> =
            progress.iter().map(|(d, v)| (date(d), *v)).collect();
        Habit::restore(
            HabitId::new(),
            "Read".to_string(),
            ActionType::Do,
            Frequency::Daily { repeats: 1 },
            Measurement::Counter { target: 2 },
            progress,
            0,
            "#4CAF50".to_string(),
            None,
        )
    }

    #[test]
    fn test_reference_sequence() {
        // d1..d4 with counts 0, 2, 1, 0.
        let contributions = vec![
            contribution("2024-01-01", 0),
            contribution("2024-01-02", 2),
            contribution("2024-01-03", 1),
            contribution("2024-01-04", 0),
        ];

        let stats = compute_stats(&contributions);
        assert_eq!(stats.total_days, 4);
        assert_eq!(stats.completed_days, 2);
        assert_eq!(stats.total_checks, 3);
        assert_eq!(stats.percent, 50);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_empty_sequence_is_all_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_days, 0);
        assert_eq!(stats.percent, 0);
        assert_eq!(stats.best_streak, 0);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let contributions = vec![
            contribution("2024-01-03", 1),
            contribution("2024-01-01", 1),
            contribution("2024-01-02", 1),
        ];

        let stats = compute_stats(&contributions);
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_trailing_run_is_current_streak() {
        let contributions = vec![
            contribution("2024-01-01", 1),
            contribution("2024-01-02", 0),
            contribution("2024-01-03", 1),
            contribution("2024-01-04", 2),
        ];

        let stats = compute_stats(&contributions);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn test_sparse_entries_count_as_consecutive() {
        // Only touched days are present: the run ignores the calendar gap.
        let contributions = vec![
            contribution("2024-01-01", 1),
            contribution("2024-01-15", 1),
            contribution("2024-02-20", 1),
        ];

        let stats = compute_stats(&contributions);
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_aggregate_merges_counts_per_date() {
        let habits = vec![
            habit_with(&[("2024-01-01", 1), ("2024-01-02", 2)]),
            habit_with(&[("2024-01-02", 3), ("2024-01-03", 1)]),
        ];

        let merged = aggregate_contributions(&habits);
        assert_eq!(
            merged,
            vec![
                contribution("2024-01-01", 1),
                contribution("2024-01-02", 5),
                contribution("2024-01-03", 1),
            ]
        );
    }

    #[test]
    fn test_heatmap_window_zero_fills_and_bins() {
        let contributions = vec![
            contribution("2024-01-09", 1),
            contribution("2024-01-10", 5),
        ];

        let cells = heatmap_window(&contributions, date("2024-01-10"), 4).unwrap();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].date, "2024-01-07");
        assert_eq!(cells[0].count, 0);
        assert_eq!(cells[0].level, 0);
        assert_eq!(cells[2].count, 1);
        assert_eq!(cells[2].level, 1);
        assert_eq!(cells[3].count, 5);
        assert_eq!(cells[3].level, 4);
    }

    #[test]
    fn test_heatmap_rejects_empty_window() {
        assert!(heatmap_window(&[], date("2024-01-10"), 0).is_err());
    }
}
