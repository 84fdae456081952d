use crate::view::MarketView;

/// Ordering applied to the markets list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Volume,
    Participants,
    Deadline,
    Raised,
}

impl SortKey {
    /// Parse the wire value used by the frontend's sort selector.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "volume" => Some(Self::Volume),
            "participants" => Some(Self::Participants),
            "deadline" => Some(Self::Deadline),
            "raised" => Some(Self::Raised),
            _ => None,
        }
    }
}

/// Search term, category and ordering for one markets query.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub search_term: String,
    /// Exact category match, or `"all"` to pass everything through.
    pub category: String,
    pub sort_key: SortKey,
}

/// Apply search, category and ordering to a batch of views.
///
/// Pure function of `(views, query)`. The sort is stable, so ties keep
/// their fetch order. Volume, participants and raised order descending;
/// deadline orders soonest first. Keys are the raw magnitudes carried on
/// the view, never re-parsed display strings.
pub fn filter_and_sort(views: &[MarketView], query: &FilterSpec) -> Vec<MarketView> {
    let term = query.search_term.to_lowercase();
    let category = query.category.to_lowercase();

    let mut out: Vec<MarketView> = views
        .iter()
        .filter(|v| matches_search(v, &term))
        .filter(|v| category == "all" || v.category == category)
        .cloned()
        .collect();

    match query.sort_key {
        SortKey::Volume => out.sort_by(|a, b| b.volume_raw.cmp(&a.volume_raw)),
        SortKey::Participants => out.sort_by(|a, b| b.participants.cmp(&a.participants)),
        SortKey::Deadline => out.sort_by(|a, b| a.deadline_ts.cmp(&b.deadline_ts)),
        SortKey::Raised => out.sort_by(|a, b| b.raised_raw.cmp(&a.raised_raw)),
    }
    out
}

/// A view matches when the term is a substring of any of company, bond id
/// or question. An empty term matches everything.
fn matches_search(view: &MarketView, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    view.company.to_lowercase().contains(term)
        || view.bond_id.to_lowercase().contains(term)
        || view.question.to_lowercase().contains(term)
}
