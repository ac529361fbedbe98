#[cfg(test)]
mod tests {
    use super::super::streak::{advance, StreakUpdate};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_completion_after_yesterday_extends_streak() {
        let today = date("2024-01-10");
        let yesterday = date("2024-01-09");

        let update = advance(5, Some(yesterday), 1, 0, 1, today, yesterday);

        assert_eq!(
            update,
            StreakUpdate {
                streak: 6,
                last_completed_date: Some(today),
            }
        );
    }

    #[test]
    fn test_completion_after_gap_resets_to_one() {
        // Continuing the example: streak banked on 2024-01-10, next
        // completion only on 2024-01-12.
        let today = date("2024-01-12");
        let yesterday = date("2024-01-11");

        let update = advance(6, Some(date("2024-01-10")), 1, 0, 1, today, yesterday);

        assert_eq!(update.streak, 1);
        assert_eq!(update.last_completed_date, Some(today));
    }

    #[test]
    fn test_first_ever_completion_starts_at_one() {
        let today = date("2024-03-01");
        let yesterday = date("2024-02-29");

        let update = advance(0, None, 1, 0, 1, today, yesterday);

        assert_eq!(update.streak, 1);
        assert_eq!(update.last_completed_date, Some(today));
    }

    #[test]
    fn test_uncompleting_never_decrements() {
        let today = date("2024-01-10");
        let yesterday = date("2024-01-09");

        // Checkbox toggled back off: completed -> not completed.
        let update = advance(6, Some(today), 1, 1, 0, today, yesterday);

        assert_eq!(update.streak, 6);
        assert_eq!(update.last_completed_date, Some(today));
    }

    #[test]
    fn test_same_day_recompletion_is_idempotent() {
        let today = date("2024-01-10");
        let yesterday = date("2024-01-09");

        // Complete, un-complete, complete again within the same day.
        let first = advance(5, Some(yesterday), 1, 0, 1, today, yesterday);
        assert_eq!(first.streak, 6);

        let toggled_off = advance(
            first.streak,
            first.last_completed_date,
            1,
            1,
            0,
            today,
            yesterday,
        );
        assert_eq!(toggled_off.streak, 6);

        let second = advance(
            toggled_off.streak,
            toggled_off.last_completed_date,
            1,
            0,
            1,
            today,
            yesterday,
        );
        assert_eq!(second.streak, 6);
        assert_eq!(second.last_completed_date, Some(today));
    }

    #[test]
    fn test_already_completed_day_is_untouched() {
        let today = date("2024-01-10");
        let yesterday = date("2024-01-09");

        // Counter past its target: 2 -> 3 with target 2 is still completed.
        let update = advance(4, Some(today), 2, 2, 3, today, yesterday);

        assert_eq!(update.streak, 4);
        assert_eq!(update.last_completed_date, Some(today));
    }

    #[test]
    fn test_counter_below_target_does_not_fire() {
        let today = date("2024-01-10");
        let yesterday = date("2024-01-09");

        let update = advance(3, Some(yesterday), 5, 1, 2, today, yesterday);

        assert_eq!(update.streak, 3);
        assert_eq!(update.last_completed_date, Some(yesterday));
    }

    #[test]
    fn test_counter_crossing_target_fires() {
        let today = date("2024-01-10");
        let yesterday = date("2024-01-09");

        let update = advance(3, Some(yesterday), 5, 4, 5, today, yesterday);

        assert_eq!(update.streak, 4);
        assert_eq!(update.last_completed_date, Some(today));
    }
}
