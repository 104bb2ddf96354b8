//! Portal payload models: ballots, member votes, contact leads.
//!
//! These mirror the JSON the portal API serves. The table engine and view
//! layer only ever read them; nothing in this crate mutates a payload.

use chrono::NaiveDate;
use serde::Deserialize;

/// Recorded position of a single legislator on one ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotePosition {
    For,
    Against,
    Abstention,
    DidNotVote,
}

impl VotePosition {
    /// All positions, in wire order.
    pub const ALL: [VotePosition; 4] = [
        VotePosition::For,
        VotePosition::Against,
        VotePosition::Abstention,
        VotePosition::DidNotVote,
    ];

    /// Wire string, as served by the portal.
    pub fn as_str(&self) -> &'static str {
        match self {
            VotePosition::For => "for",
            VotePosition::Against => "against",
            VotePosition::Abstention => "abstention",
            VotePosition::DidNotVote => "did_not_vote",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            VotePosition::For => "Ja",
            VotePosition::Against => "Nein",
            VotePosition::Abstention => "Enthaltung",
            VotePosition::DidNotVote => "Nicht abgestimmt",
        }
    }

    /// Parses a wire string. `None` for anything outside the enumerated set.
    pub fn parse(s: &str) -> Option<VotePosition> {
        Self::ALL.iter().copied().find(|p| p.as_str() == s)
    }
}

/// Ballot lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteStatus {
    Upcoming,
    #[default]
    Completed,
}

impl VoteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VoteStatus::Upcoming => "Anstehend",
            VoteStatus::Completed => "Abgeschlossen",
        }
    }
}

/// One legislator's recorded vote on one ballot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberVote {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub vote_position: VotePosition,
    /// Party/caucus label. Empty when the member is unaffiliated.
    #[serde(default)]
    pub group: String,
    /// Region label. Empty when not reported.
    #[serde(default)]
    pub state: String,
    /// Member profile link.
    #[serde(default)]
    pub url: Option<String>,
}

impl MemberVote {
    /// `"{first_name} {last_name}"`, the form name filtering and sorting use.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Aggregated counts for one ballot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub total: u32,
    pub yes: u32,
    pub no: u32,
    pub abstention: u32,
    pub did_not_vote: u32,
}

impl VoteTally {
    fn pct(part: u32, total: u32) -> u8 {
        if total == 0 {
            return 0;
        }
        ((part as f64 / total as f64) * 100.0).round() as u8
    }

    pub fn yes_pct(&self) -> u8 {
        Self::pct(self.yes, self.total)
    }

    pub fn no_pct(&self) -> u8 {
        Self::pct(self.no, self.total)
    }

    pub fn abstention_pct(&self) -> u8 {
        Self::pct(self.abstention, self.total)
    }
}

/// One parliamentary ballot with its per-member breakdown.
///
/// Wire tallies are flat (`total_member_yes_votes`, ...); [`Vote::member_tally`]
/// and [`Vote::user_tally`] regroup them for rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct Vote {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub vote_date: NaiveDate,
    #[serde(default)]
    pub status: VoteStatus,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub total_member_votes: u32,
    #[serde(default)]
    pub total_member_yes_votes: u32,
    #[serde(default)]
    pub total_member_no_votes: u32,
    #[serde(default)]
    pub total_member_abstain_votes: u32,
    #[serde(default)]
    pub total_member_did_not_vote_votes: u32,

    #[serde(default)]
    pub total_user_votes: u32,
    #[serde(default)]
    pub total_user_yes_votes: u32,
    #[serde(default)]
    pub total_user_no_votes: u32,
    #[serde(default)]
    pub total_user_abstain_votes: u32,

    #[serde(default)]
    pub member_votes: Vec<MemberVote>,
}

impl Vote {
    /// Chamber result of this ballot.
    pub fn member_tally(&self) -> VoteTally {
        VoteTally {
            total: self.total_member_votes,
            yes: self.total_member_yes_votes,
            no: self.total_member_no_votes,
            abstention: self.total_member_abstain_votes,
            did_not_vote: self.total_member_did_not_vote_votes,
        }
    }

    /// Portal-user poll result of this ballot.
    pub fn user_tally(&self) -> VoteTally {
        VoteTally {
            total: self.total_user_votes,
            yes: self.total_user_yes_votes,
            no: self.total_user_no_votes,
            abstention: self.total_user_abstain_votes,
            did_not_vote: 0,
        }
    }
}

/// Contact request submitted through the portal.
#[derive(Debug, Clone, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub contact_type: String,
    #[serde(default)]
    pub message: String,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response envelope for the votes endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VotesPayload {
    pub results: Vec<Vote>,
}

/// Response envelope for the leads endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadsPayload {
    pub results: Vec<Lead>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_position_roundtrips_wire_strings() {
        for pos in VotePosition::ALL {
            assert_eq!(VotePosition::parse(pos.as_str()), Some(pos));
        }
        assert_eq!(VotePosition::parse("yes"), None);
        assert_eq!(VotePosition::parse(""), None);
    }

    #[test]
    fn member_vote_deserializes_with_missing_optionals() {
        let mv: MemberVote = serde_json::from_str(
            r#"{"id":7,"first_name":"Ann","last_name":"Young","vote_position":"did_not_vote"}"#,
        )
        .unwrap();
        assert_eq!(mv.vote_position, VotePosition::DidNotVote);
        assert_eq!(mv.group, "");
        assert_eq!(mv.state, "");
        assert_eq!(mv.url, None);
        assert_eq!(mv.full_name(), "Ann Young");
    }

    #[test]
    fn vote_regroups_flat_wire_tallies() {
        let vote: Vote = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Klimaschutzgesetz",
                "vote_date": "2025-03-14",
                "status": "completed",
                "total_member_votes": 600,
                "total_member_yes_votes": 300,
                "total_member_no_votes": 200,
                "total_member_abstain_votes": 60,
                "total_member_did_not_vote_votes": 40
            }"#,
        )
        .unwrap();
        let tally = vote.member_tally();
        assert_eq!(tally.total, 600);
        assert_eq!(tally.yes_pct(), 50);
        assert_eq!(tally.no_pct(), 33);
        assert_eq!(tally.abstention_pct(), 10);
        assert!(vote.member_votes.is_empty());
    }

    #[test]
    fn tally_percentages_are_zero_for_empty_total() {
        let tally = VoteTally::default();
        assert_eq!(tally.yes_pct(), 0);
        assert_eq!(tally.no_pct(), 0);
    }
}
