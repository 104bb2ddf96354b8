//! Member-vote table engine: filter, stable sort, pagination.
//!
//! Three pure derivation stages chained in a fixed order — raw records →
//! filtered → sorted → paginated — plus the configuration state that drives
//! them. Records are never mutated; every stage produces a new view over the
//! payload owned by the caller.

use std::cmp::Ordering;

use crate::models::{MemberVote, VotePosition};

/// Number of page buttons shown around the current page.
pub const PAGE_WINDOW: usize = 5;

/// Configuration errors. Rejected at the point of mutation, never discovered
/// during derivation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("page size must be positive, got {0}")]
    InvalidPageSize(usize),
    #[error("unknown sort field: {0:?}")]
    UnknownSortField(String),
    #[error("unknown vote position: {0:?}")]
    UnknownVotePosition(String),
}

/// Column a member-vote table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    VotePosition,
    Group,
    State,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::VotePosition,
        SortField::Group,
        SortField::State,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::VotePosition => "vote_position",
            SortField::Group => "group",
            SortField::State => "state",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::VotePosition => "Abstimmung",
            SortField::Group => "Fraktion",
            SortField::State => "Bundesland",
        }
    }

    pub fn parse(s: &str) -> Result<SortField, ConfigError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownSortField(s.to_string()))
    }

    /// Next field in cycling order (wraps around).
    pub fn next(&self) -> SortField {
        match self {
            SortField::Name => SortField::Group,
            SortField::Group => SortField::VotePosition,
            SortField::VotePosition => SortField::State,
            SortField::State => SortField::Name,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Per-record filter predicates. All active predicates must hold; inactive
/// ones are vacuously true.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberFilter {
    /// Case-insensitive substring over `"{first_name} {last_name}"`.
    pub name_query: String,
    /// `None` = all positions.
    pub position: Option<VotePosition>,
    /// Exact group match, case-sensitive. `None` = all groups.
    pub group: Option<String>,
    /// Exact state match. `None` = all states.
    pub state: Option<String>,
}

impl MemberFilter {
    pub fn is_active(&self) -> bool {
        !self.name_query.is_empty()
            || self.position.is_some()
            || self.group.is_some()
            || self.state.is_some()
    }

    pub fn matches(&self, mv: &MemberVote) -> bool {
        if !self.name_query.is_empty()
            && !mv
                .full_name()
                .to_lowercase()
                .contains(&self.name_query.to_lowercase())
        {
            return false;
        }
        if let Some(position) = self.position
            && mv.vote_position != position
        {
            return false;
        }
        if let Some(group) = &self.group
            && mv.group != *group
        {
            return false;
        }
        if let Some(state) = &self.state
            && mv.state != *state
        {
            return false;
        }
        true
    }
}

/// Parses a position filter value: `"all"` clears the predicate, a wire
/// position string selects it, anything else is rejected.
pub fn parse_position_filter(s: &str) -> Result<Option<VotePosition>, ConfigError> {
    if s == "all" {
        return Ok(None);
    }
    VotePosition::parse(s)
        .map(Some)
        .ok_or_else(|| ConfigError::UnknownVotePosition(s.to_string()))
}

/// 1-based page cursor plus page size. A zero page size is rejected at
/// construction; the derivation stages can therefore never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: Self::SIZES[0],
        }
    }
}

impl PageState {
    /// Page sizes offered by the UI.
    pub const SIZES: [usize; 4] = [10, 25, 50, 100];

    pub fn new(page_size: usize) -> Result<PageState, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize(page_size));
        }
        Ok(PageState {
            current_page: 1,
            page_size,
        })
    }

    /// Changes the page size and resets to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Derivation stages
// ---------------------------------------------------------------------------

/// Distinct non-empty group values, ascending, each exactly once.
pub fn unique_groups(records: &[MemberVote]) -> Vec<String> {
    unique_values(records, |mv| &mv.group)
}

/// Distinct non-empty state values, ascending, each exactly once.
pub fn unique_states(records: &[MemberVote]) -> Vec<String> {
    unique_values(records, |mv| &mv.state)
}

fn unique_values<F>(records: &[MemberVote], get: F) -> Vec<String>
where
    F: Fn(&MemberVote) -> &String,
{
    let mut values: Vec<String> = records
        .iter()
        .map(get)
        .filter(|v| !v.is_empty())
        .cloned()
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Order-preserving subsequence of `records` matching all active predicates.
pub fn apply_filter<'a>(records: &'a [MemberVote], filter: &MemberFilter) -> Vec<&'a MemberVote> {
    records.iter().filter(|mv| filter.matches(mv)).collect()
}

fn compare(a: &MemberVote, b: &MemberVote, field: SortField) -> Ordering {
    match field {
        SortField::Name => a
            .full_name()
            .to_lowercase()
            .cmp(&b.full_name().to_lowercase()),
        // Raw wire string, not semantic order: abstention < against <
        // did_not_vote < for. Matches the portal front-end.
        SortField::VotePosition => a.vote_position.as_str().cmp(b.vote_position.as_str()),
        SortField::Group => a.group.to_lowercase().cmp(&b.group.to_lowercase()),
        SortField::State => a.state.to_lowercase().cmp(&b.state.to_lowercase()),
    }
}

/// Sorts rows in place. `sort_by` is stable, so records comparing equal keep
/// their relative order from the filtered sequence; reversing `Equal` is
/// still `Equal`, so descending order preserves ties too.
pub fn apply_sort(rows: &mut [&MemberVote], field: SortField, order: SortOrder) {
    rows.sort_by(|a, b| {
        let cmp = compare(a, b, field);
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
}

/// Page count for a row count: at least 1, even for an empty sequence.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

/// Slices out the current page. A `current_page` beyond the last page is
/// corrected to the last page as an observable mutation of the page state
/// (self-healing clamp, not an error). The result is empty only when `rows`
/// is empty.
pub fn paginate<'a>(rows: &[&'a MemberVote], page: &mut PageState) -> Vec<&'a MemberVote> {
    let pages = total_pages(rows.len(), page.page_size);
    if page.current_page > pages {
        page.current_page = pages;
    }
    let start = (page.current_page - 1) * page.page_size;
    rows.iter().skip(start).take(page.page_size).copied().collect()
}

/// Page numbers to present as controls: all pages when they fit the window,
/// otherwise a window centered on the current page that clamps at either end.
pub fn pagination_window(current_page: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if window == 0 || total_pages == 0 {
        return Vec::new();
    }
    let half = window / 2;
    let (start, end) = if total_pages <= window {
        (1, total_pages)
    } else if current_page <= half + 1 {
        (1, window)
    } else if current_page + half >= total_pages {
        (total_pages - window + 1, total_pages)
    } else {
        (current_page - half, current_page + half)
    };
    (start..=end).collect()
}

// ---------------------------------------------------------------------------
// Stateful engine
// ---------------------------------------------------------------------------

/// One derived page of the table, plus the metadata the rendering layer
/// needs for sort indicators and page controls.
#[derive(Debug)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a MemberVote>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    /// Clickable page numbers around the current page.
    pub window: Vec<usize>,
}

/// Filter + sort + page configuration over a member-vote record set.
///
/// The filtered-and-sorted row order is memoized as an index vector so that
/// page-only changes (next page, jump to page) do not refilter or resort.
/// Every configuration mutation that changes the visible set resets the
/// cursor to page 1 and drops the cache.
#[derive(Debug, Default)]
pub struct MemberVoteTable {
    filter: MemberFilter,
    sort_field: SortField,
    sort_order: SortOrder,
    page: PageState,
    ordered: Option<Vec<usize>>,
}

impl MemberVoteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &MemberFilter {
        &self.filter
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    /// Drops the memoized order. Must be called when the record set the
    /// engine is queried against is replaced.
    pub fn invalidate(&mut self) {
        self.ordered = None;
    }

    fn filter_changed(&mut self) {
        self.page.current_page = 1;
        self.ordered = None;
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.filter.name_query = query.into();
        self.filter_changed();
    }

    pub fn set_position(&mut self, position: Option<VotePosition>) {
        self.filter.position = position;
        self.filter_changed();
    }

    pub fn set_group(&mut self, group: Option<String>) {
        self.filter.group = group;
        self.filter_changed();
    }

    pub fn set_state(&mut self, state: Option<String>) {
        self.filter.state = state;
        self.filter_changed();
    }

    /// Clears every filter predicate and returns to the first page.
    pub fn reset_filters(&mut self) {
        self.filter = MemberFilter::default();
        self.filter_changed();
    }

    /// Sorts by `field`: selecting the active field toggles the direction,
    /// selecting a new field starts ascending.
    pub fn sort_by(&mut self, field: SortField) {
        if field == self.sort_field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Asc;
        }
        self.ordered = None;
    }

    /// Sets field and direction explicitly (configuration boundary; no
    /// toggle semantics).
    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.sort_field = field;
        self.sort_order = order;
        self.ordered = None;
    }

    /// Cycles to the next sort column, ascending.
    pub fn next_sort_field(&mut self) {
        self.sort_field = self.sort_field.next();
        self.sort_order = SortOrder::Asc;
        self.ordered = None;
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
        self.ordered = None;
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ConfigError> {
        self.page.set_page_size(page_size)
    }

    /// Cycles through the offered page sizes (10 → 25 → 50 → 100 → 10).
    pub fn cycle_page_size(&mut self) {
        let sizes = PageState::SIZES;
        let idx = sizes.iter().position(|&s| s == self.page.page_size);
        let next = sizes[idx.map_or(0, |i| (i + 1) % sizes.len())];
        // Sizes come from the enumerated set, so this cannot fail.
        let _ = self.page.set_page_size(next);
    }

    /// Moves the cursor. Values below 1 saturate at 1; values beyond the
    /// last page are self-healed by the next [`Self::page_view`].
    pub fn goto_page(&mut self, page: usize) {
        self.page.current_page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.page.current_page += 1;
    }

    pub fn prev_page(&mut self) {
        self.page.current_page = self.page.current_page.saturating_sub(1).max(1);
    }

    fn ordered_rows<'a>(&mut self, records: &'a [MemberVote]) -> Vec<&'a MemberVote> {
        if self.ordered.is_none() {
            let mut index: Vec<usize> = (0..records.len())
                .filter(|&i| self.filter.matches(&records[i]))
                .collect();
            let (field, order) = (self.sort_field, self.sort_order);
            index.sort_by(|&a, &b| {
                let cmp = compare(&records[a], &records[b], field);
                match order {
                    SortOrder::Asc => cmp,
                    SortOrder::Desc => cmp.reverse(),
                }
            });
            self.ordered = Some(index);
        }
        match &self.ordered {
            Some(index) => index.iter().map(|&i| &records[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Derives the visible page for the current configuration. Clamps the
    /// cursor into `[1, total_pages]` as a side effect.
    pub fn page_view<'a>(&mut self, records: &'a [MemberVote]) -> TablePage<'a> {
        let ordered = self.ordered_rows(records);
        let total_items = ordered.len();
        let pages = total_pages(total_items, self.page.page_size);
        let rows = paginate(&ordered, &mut self.page);
        TablePage {
            rows,
            total_items,
            total_pages: pages,
            current_page: self.page.current_page,
            window: pagination_window(self.page.current_page, pages, PAGE_WINDOW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(
        id: i64,
        first: &str,
        last: &str,
        position: VotePosition,
        group: &str,
        state: &str,
    ) -> MemberVote {
        MemberVote {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            vote_position: position,
            group: group.to_string(),
            state: state.to_string(),
            url: None,
        }
    }

    fn chamber() -> Vec<MemberVote> {
        use VotePosition::*;
        vec![
            mv(1, "Bob", "Young", For, "Green", "Berlin"),
            mv(2, "Ann", "Young", Against, "Red", "Hamburg"),
            mv(3, "Cid", "Young", For, "Green", "Berlin"),
            mv(4, "Dea", "Old", Abstention, "", "Bremen"),
            mv(5, "Eva", "Old", DidNotVote, "Red", ""),
            mv(6, "Fay", "Old", For, "Green", "Hamburg"),
        ]
    }

    #[test]
    fn filter_by_group_keeps_subsequence_order() {
        // 12 records, 3 of them Green.
        let mut records = chamber();
        records.extend(chamber().into_iter().map(|mut m| {
            m.id += 10;
            m.group = "Blue".to_string();
            m
        }));
        let filter = MemberFilter {
            group: Some("Green".to_string()),
            ..MemberFilter::default()
        };
        let rows = apply_filter(&records, &filter);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3, 6]);
    }

    #[test]
    fn name_filter_is_case_insensitive_over_full_name() {
        let records = chamber();
        let filter = MemberFilter {
            name_query: "b yo".to_string(),
            ..MemberFilter::default()
        };
        let rows = apply_filter(&records, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }

    #[test]
    fn all_active_predicates_must_hold() {
        let records = chamber();
        let filter = MemberFilter {
            position: Some(VotePosition::For),
            group: Some("Green".to_string()),
            state: Some("Hamburg".to_string()),
            ..MemberFilter::default()
        };
        let rows = apply_filter(&records, &filter);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![6]);

        // Group match is exact and case-sensitive.
        let filter = MemberFilter {
            group: Some("green".to_string()),
            ..MemberFilter::default()
        };
        assert!(apply_filter(&records, &filter).is_empty());
    }

    #[test]
    fn sort_by_name_orders_lowercased_full_names() {
        let records = chamber();
        let mut rows = apply_filter(&records, &MemberFilter::default());
        apply_sort(&mut rows, SortField::Name, SortOrder::Asc);
        let names: Vec<String> = rows.iter().take(3).map(|r| r.full_name()).collect();
        assert_eq!(names, vec!["Ann Young", "Bob Young", "Cid Young"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let records = chamber();
        let mut rows = apply_filter(&records, &MemberFilter::default());
        apply_sort(&mut rows, SortField::Group, SortOrder::Asc);
        // Empty group first, then Green (ids 1, 3, 6 in input order), then Red.
        assert_eq!(
            rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![4, 1, 3, 6, 2, 5]
        );

        // Descending reverses the key order but keeps ties in input order.
        apply_sort(&mut rows, SortField::Group, SortOrder::Asc);
        apply_sort(&mut rows, SortField::Group, SortOrder::Desc);
        assert_eq!(
            rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![2, 5, 1, 3, 6, 4]
        );
    }

    #[test]
    fn sort_is_a_permutation_and_idempotent() {
        let records = chamber();
        let mut rows = apply_filter(&records, &MemberFilter::default());
        apply_sort(&mut rows, SortField::State, SortOrder::Asc);

        let mut ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let once: Vec<i64> = rows.iter().map(|r| r.id).collect();
        apply_sort(&mut rows, SortField::State, SortOrder::Asc);
        let twice: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn vote_position_sorts_by_wire_string_not_semantics() {
        use VotePosition::*;
        let records = vec![
            mv(1, "A", "A", For, "", ""),
            mv(2, "B", "B", Against, "", ""),
            mv(3, "C", "C", DidNotVote, "", ""),
            mv(4, "D", "D", Abstention, "", ""),
        ];
        let mut rows = apply_filter(&records, &MemberFilter::default());
        apply_sort(&mut rows, SortField::VotePosition, SortOrder::Asc);
        assert_eq!(
            rows.iter().map(|r| r.vote_position).collect::<Vec<_>>(),
            vec![Abstention, Against, DidNotVote, For]
        );
    }

    #[test]
    fn pages_cover_the_sequence_exactly_once() {
        let records: Vec<MemberVote> = (0..23)
            .map(|i| mv(i, "M", &format!("N{i:02}"), VotePosition::For, "G", "S"))
            .collect();
        let rows = apply_filter(&records, &MemberFilter::default());

        let mut page = PageState::new(10).unwrap();
        assert_eq!(total_pages(rows.len(), page.page_size), 3);

        let mut seen: Vec<i64> = Vec::new();
        for p in 1..=3 {
            page.current_page = p;
            let slice = paginate(&rows, &mut page);
            if p == 3 {
                assert_eq!(slice.len(), 3);
            } else {
                assert_eq!(slice.len(), 10);
            }
            seen.extend(slice.iter().map(|r| r.id));
        }
        assert_eq!(seen, (0..23).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_page_is_clamped_to_last_page() {
        let records = chamber();
        let rows = apply_filter(&records, &MemberFilter::default());
        let mut page = PageState::new(3).unwrap();
        page.current_page = 5;
        let slice = paginate(&rows, &mut page);
        assert_eq!(page.current_page, 2);
        assert_eq!(slice.len(), 3);
    }

    #[test]
    fn empty_sequence_still_has_one_page() {
        let mut page = PageState::new(10).unwrap();
        page.current_page = 4;
        let slice = paginate(&[], &mut page);
        assert!(slice.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn pagination_window_clamps_at_both_ends() {
        assert_eq!(pagination_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(pagination_window(3, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(pagination_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(pagination_window(8, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(pagination_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(pagination_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(pagination_window(1, 1, 5), vec![1]);
    }

    #[test]
    fn zero_page_size_is_rejected_at_the_boundary() {
        assert_eq!(PageState::new(0), Err(ConfigError::InvalidPageSize(0)));
        let mut page = PageState::default();
        assert_eq!(
            page.set_page_size(0),
            Err(ConfigError::InvalidPageSize(0))
        );
        // Rejected update leaves the state untouched.
        assert_eq!(page.page_size, 10);
    }

    #[test]
    fn unknown_configuration_values_are_rejected() {
        assert_eq!(
            SortField::parse("votes"),
            Err(ConfigError::UnknownSortField("votes".to_string()))
        );
        assert_eq!(SortField::parse("vote_position"), Ok(SortField::VotePosition));
        assert_eq!(parse_position_filter("all"), Ok(None));
        assert_eq!(
            parse_position_filter("for"),
            Ok(Some(VotePosition::For))
        );
        assert_eq!(
            parse_position_filter("maybe"),
            Err(ConfigError::UnknownVotePosition("maybe".to_string()))
        );
    }

    #[test]
    fn filter_and_page_size_changes_reset_the_cursor() {
        let records = chamber();
        let mut table = MemberVoteTable::new();
        table.set_page_size(2).unwrap();
        table.goto_page(3);
        assert_eq!(table.page_view(&records).current_page, 3);

        table.set_group(Some("Green".to_string()));
        assert_eq!(table.page().current_page, 1);

        table.goto_page(2);
        table.cycle_page_size();
        assert_eq!(table.page().current_page, 1);
    }

    #[test]
    fn narrowing_filter_self_heals_the_cursor() {
        let records = chamber();
        let mut table = MemberVoteTable::new();
        table.set_page_size(2).unwrap();
        table.goto_page(3);
        assert_eq!(table.page_view(&records).total_pages, 3);

        // Narrow to 3 rows (2 pages), then jump past the end: next view
        // corrects the cursor instead of erroring.
        table.set_position(Some(VotePosition::For));
        table.goto_page(5);
        let view = table.page_view(&records);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn selecting_the_active_sort_field_toggles_direction() {
        let mut table = MemberVoteTable::new();
        assert_eq!(table.sort_field(), SortField::Name);
        assert_eq!(table.sort_order(), SortOrder::Asc);

        table.sort_by(SortField::Name);
        assert_eq!(table.sort_order(), SortOrder::Desc);

        table.sort_by(SortField::Group);
        assert_eq!(table.sort_field(), SortField::Group);
        assert_eq!(table.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn page_only_changes_reuse_the_memoized_order() {
        let records = chamber();
        let mut table = MemberVoteTable::new();
        table.set_page_size(2).unwrap();

        let first: Vec<i64> = table.page_view(&records).rows.iter().map(|r| r.id).collect();
        table.next_page();
        let second: Vec<i64> = table.page_view(&records).rows.iter().map(|r| r.id).collect();
        table.prev_page();
        let again: Vec<i64> = table.page_view(&records).rows.iter().map(|r| r.id).collect();

        assert_eq!(first, again);
        assert!(first.iter().all(|id| !second.contains(id)));
    }

    #[test]
    fn unique_options_are_sorted_deduplicated_and_non_empty() {
        let records = chamber();
        assert_eq!(unique_groups(&records), vec!["Green", "Red"]);
        assert_eq!(unique_states(&records), vec!["Berlin", "Bremen", "Hamburg"]);
        assert!(unique_groups(&[]).is_empty());
    }
}
