//! Votes-list view model: ballots grouped by date, newest first.

use chrono::NaiveDate;

use crate::models::{Vote, VoteStatus, VoteTally};

/// Status filter for the votes list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Upcoming,
    Completed,
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Alle",
            StatusFilter::Upcoming => "Anstehend",
            StatusFilter::Completed => "Abgeschlossen",
        }
    }

    pub fn next(&self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Upcoming,
            StatusFilter::Upcoming => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }

    fn matches(&self, status: VoteStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => status == VoteStatus::Upcoming,
            StatusFilter::Completed => status == VoteStatus::Completed,
        }
    }
}

/// One ballot card in the list.
#[derive(Debug)]
pub struct VoteCardView {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub date: NaiveDate,
    /// True for the first card of each date; the widget draws a date
    /// separator above it.
    pub starts_date_group: bool,
    pub status: VoteStatus,
    pub category: Option<String>,
    pub member_tally: VoteTally,
    pub user_tally: VoteTally,
    pub member_count: usize,
}

/// Votes list derived from the payload: filtered by title/summary query and
/// status, ordered by date descending (ties keep payload order).
pub fn build_votes_view(votes: &[Vote], query: &str, status: StatusFilter) -> Vec<VoteCardView> {
    let query = query.to_lowercase();
    let mut filtered: Vec<&Vote> = votes
        .iter()
        .filter(|v| status.matches(v.status))
        .filter(|v| {
            query.is_empty()
                || v.title.to_lowercase().contains(&query)
                || v.summary.to_lowercase().contains(&query)
        })
        .collect();
    filtered.sort_by(|a, b| b.vote_date.cmp(&a.vote_date));

    let mut cards = Vec::with_capacity(filtered.len());
    let mut prev_date: Option<NaiveDate> = None;
    for vote in filtered {
        cards.push(VoteCardView {
            id: vote.id,
            title: vote.title.clone(),
            summary: vote.summary.clone(),
            date: vote.vote_date,
            starts_date_group: prev_date != Some(vote.vote_date),
            status: vote.status,
            category: vote.category.clone(),
            member_tally: vote.member_tally(),
            user_tally: vote.user_tally(),
            member_count: vote.member_votes.len(),
        });
        prev_date = Some(vote.vote_date);
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(id: i64, title: &str, date: &str, status: &str) -> Vote {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "vote_date": date,
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn cards_are_grouped_by_date_descending() {
        let votes = vec![
            vote(1, "Altes Gesetz", "2025-01-10", "completed"),
            vote(2, "Neues Gesetz", "2025-03-01", "completed"),
            vote(3, "Zweites neues Gesetz", "2025-03-01", "completed"),
        ];
        let cards = build_votes_view(&votes, "", StatusFilter::All);
        assert_eq!(
            cards.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );
        assert!(cards[0].starts_date_group);
        assert!(!cards[1].starts_date_group);
        assert!(cards[2].starts_date_group);
    }

    #[test]
    fn query_matches_title_or_summary_case_insensitively() {
        let mut with_summary = vote(1, "Klimaschutz", "2025-01-10", "completed");
        with_summary.summary = "Sektorziele der Bundesregierung".to_string();
        let votes = vec![with_summary, vote(2, "Agrar", "2025-01-11", "completed")];

        assert_eq!(build_votes_view(&votes, "klima", StatusFilter::All).len(), 1);
        assert_eq!(
            build_votes_view(&votes, "bundesregierung", StatusFilter::All).len(),
            1
        );
        assert!(build_votes_view(&votes, "xyz", StatusFilter::All).is_empty());
    }

    #[test]
    fn status_filter_cycles_and_filters() {
        let votes = vec![
            vote(1, "A", "2025-01-10", "completed"),
            vote(2, "B", "2025-01-11", "upcoming"),
        ];
        assert_eq!(build_votes_view(&votes, "", StatusFilter::All).len(), 2);
        let upcoming = build_votes_view(&votes, "", StatusFilter::Upcoming);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, 2);
        assert_eq!(StatusFilter::All.next().next().next(), StatusFilter::All);
    }
}
