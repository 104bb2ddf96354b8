//! Member-vote table view model.

use crate::fmt::truncate;
use crate::models::{MemberVote, Vote, VotePosition};
use crate::table::{MemberVoteTable, SortField, SortOrder};
use crate::view::common::{Pager, RowStyleClass, TableViewModel, ViewCell, ViewRow};

const HEADERS: &[&str] = &["NAME", "FRAKTION", "ABSTIMMUNG", "BUNDESLAND"];
const WIDTHS: &[u16] = &[30, 16, 20, 20];

fn sort_column(field: SortField) -> usize {
    match field {
        SortField::Name => 0,
        SortField::Group => 1,
        SortField::VotePosition => 2,
        SortField::State => 3,
    }
}

fn position_class(position: VotePosition) -> RowStyleClass {
    match position {
        VotePosition::For => RowStyleClass::Active,
        VotePosition::Against => RowStyleClass::Critical,
        VotePosition::Abstention | VotePosition::DidNotVote => RowStyleClass::Dimmed,
    }
}

fn dash_if_empty(s: &str) -> &str {
    if s.is_empty() { "–" } else { s }
}

fn cells(mv: &MemberVote) -> Vec<ViewCell> {
    let name = if mv.url.is_some() {
        format!("{} ↗", mv.full_name())
    } else {
        mv.full_name()
    };
    vec![
        ViewCell::plain(truncate(&name, 30)),
        ViewCell::plain(truncate(dash_if_empty(&mv.group), 16)),
        ViewCell::styled(
            mv.vote_position.label().to_string(),
            position_class(mv.vote_position),
        ),
        ViewCell::plain(truncate(dash_if_empty(&mv.state), 20)),
    ]
}

/// Builds the visible page of the member-vote table for one ballot.
/// Derivation (filter, sort, pagination, cursor clamp) happens inside the
/// engine; this only shapes cells and the title.
pub fn build_member_votes_view(
    vote: &Vote,
    table: &mut MemberVoteTable,
) -> TableViewModel<i64> {
    let filter_summary = {
        let filter = table.filter();
        let mut markers = String::new();
        if !filter.name_query.is_empty() {
            markers.push_str(&format!(" (name: {})", filter.name_query));
        }
        if let Some(position) = filter.position {
            markers.push_str(&format!(" [{}]", position.label()));
        }
        if let Some(group) = &filter.group {
            markers.push_str(&format!(" [{}]", group));
        }
        if let Some(state) = &filter.state {
            markers.push_str(&format!(" [{}]", state));
        }
        markers
    };

    let page = table.page_view(&vote.member_votes);

    let rows: Vec<ViewRow<i64>> = page
        .rows
        .iter()
        .map(|mv| ViewRow {
            id: mv.id,
            cells: cells(mv),
            style: RowStyleClass::Normal,
        })
        .collect();

    let title = format!(
        " Abstimmungsverhalten — {}{} [{} von {} Stimmen] ",
        truncate(&vote.title, 40).trim_end(),
        filter_summary,
        page.rows.len(),
        page.total_items,
    );

    TableViewModel {
        title,
        headers: HEADERS.iter().map(|s| s.to_string()).collect(),
        widths: WIDTHS.to_vec(),
        rows,
        sort_column: Some(sort_column(table.sort_field())),
        sort_ascending: table.sort_order() == SortOrder::Asc,
        pager: Some(Pager {
            total_items: page.total_items,
            current_page: page.current_page,
            total_pages: page.total_pages,
            page_size: table.page().page_size,
            window: page.window,
        }),
    }
}
