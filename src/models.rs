use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use std::fmt;

/**
 * A poll prompt, visible once its `pub_date` has passed
 */
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /**
     * True when the question went out within the last day
     */
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/**
 * One selectable answer to a question along with its tally
 */
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub votes: i64,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn published(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            text: "What's new?".to_string(),
            pub_date,
        }
    }

    #[test]
    fn future_question_is_not_recent() {
        let now = Utc::now();
        let question = published(now + Duration::days(30));
        assert!(!question.was_published_recently_at(now));
    }

    #[test]
    fn question_a_day_and_a_second_ahead_is_not_recent() {
        let now = Utc::now();
        let question = published(now + Duration::days(1) + Duration::seconds(1));
        assert!(!question.was_published_recently_at(now));
    }

    #[test]
    fn question_older_than_a_day_is_not_recent() {
        let now = Utc::now();
        let question = published(now - Duration::days(1) - Duration::seconds(1));
        assert!(!question.was_published_recently_at(now));
    }

    #[test]
    fn question_within_the_last_day_is_recent() {
        let now = Utc::now();
        let question =
            published(now - Duration::hours(23) - Duration::minutes(59) - Duration::seconds(59));
        assert!(question.was_published_recently_at(now));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let now = Utc::now();
        assert!(published(now).was_published_recently_at(now));
        assert!(published(now - Duration::days(1)).was_published_recently_at(now));
    }

    #[test]
    fn recent_against_wall_clock() {
        let question = published(Utc::now() - Duration::hours(1));
        assert!(question.was_published_recently());
    }

    #[test]
    fn display_is_the_text() {
        let question = published(Utc::now());
        assert_eq!(question.to_string(), "What's new?");

        let choice = Choice {
            id: 3,
            question_id: 1,
            text: "Not much".to_string(),
            votes: 0,
        };
        assert_eq!(format!("{}", choice), "Not much");
    }
}
