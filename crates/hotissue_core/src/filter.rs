use crate::post::{Post, KNOWN_CATEGORIES, KNOWN_SITES};

/// Site selection driving the derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Advances to the next selection: All, then each known site, then All.
    pub(crate) fn cycled(&self) -> Self {
        match self {
            SiteFilter::All => SiteFilter::Site(KNOWN_SITES[0].to_string()),
            SiteFilter::Site(id) => match KNOWN_SITES.iter().position(|known| known == id) {
                Some(index) if index + 1 < KNOWN_SITES.len() => {
                    SiteFilter::Site(KNOWN_SITES[index + 1].to_string())
                }
                _ => SiteFilter::All,
            },
        }
    }
}

/// Category selection driving the derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub(crate) fn cycled(&self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Category(KNOWN_CATEGORIES[0].to_string()),
            CategoryFilter::Category(id) => {
                match KNOWN_CATEGORIES.iter().position(|known| known == id) {
                    Some(index) if index + 1 < KNOWN_CATEGORIES.len() => {
                        CategoryFilter::Category(KNOWN_CATEGORIES[index + 1].to_string())
                    }
                    _ => CategoryFilter::All,
                }
            }
        }
    }
}

/// Sort order for the derived view. Defaults to newest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Latest,
    Views,
    Likes,
}

impl SortKey {
    pub(crate) fn cycled(self) -> Self {
        match self {
            SortKey::Latest => SortKey::Views,
            SortKey::Views => SortKey::Likes,
            SortKey::Likes => SortKey::Latest,
        }
    }
}

/// The current site/category/sort/search selection. Owned by the controller
/// state and replaced wholesale per user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub site: SiteFilter,
    pub category: CategoryFilter,
    pub sort: SortKey,
    pub search: String,
}

/// Pure derivation of the filtered-and-sorted view.
///
/// Applies the site and category equality predicates (skipped when set to
/// All), then a case-insensitive substring match on the title (skipped when
/// the search text is empty), then the sort comparator. The input order is
/// the backend response order; `sort_by` is stable, so equal sort keys keep
/// that order. The input is never mutated.
pub fn filter_and_sort(posts: &[Post], filter: &FilterState) -> Vec<Post> {
    let mut filtered: Vec<Post> = posts.to_vec();

    if let SiteFilter::Site(id) = &filter.site {
        filtered.retain(|post| post.site == *id);
    }
    if let CategoryFilter::Category(id) = &filter.category {
        filtered.retain(|post| post.category.as_deref() == Some(id.as_str()));
    }
    if !filter.search.is_empty() {
        let needle = filter.search.to_lowercase();
        filtered.retain(|post| post.title.to_lowercase().contains(&needle));
    }

    match filter.sort {
        SortKey::Views => {
            filtered.sort_by(|a, b| b.views.unwrap_or(0).cmp(&a.views.unwrap_or(0)));
        }
        SortKey::Likes => {
            filtered.sort_by(|a, b| b.likes.unwrap_or(0).cmp(&a.likes.unwrap_or(0)));
        }
        // Descending by timestamp; None is the smallest Option, so posts
        // without a parseable timestamp sink to the end as oldest.
        SortKey::Latest => filtered.sort_by(|a, b| b.crawled_at.cmp(&a.crawled_at)),
    }

    filtered
}
