//! Header/hero counters with their fallback chain.

use api::HomeStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayStats {
    pub total_repositories: u64,
    pub open_deep_wiki_stars: u64,
}

impl DisplayStats {
    /// Total: explicit stat, else listing total, else the number of items on
    /// screen. Zero counts as missing at every step. Stars default to zero.
    pub fn resolve(stats: Option<&HomeStats>, listing_total: u64, listed: usize) -> Self {
        let explicit_total = stats.and_then(|s| s.total_repositories).filter(|n| *n > 0);
        let total_repositories = explicit_total
            .or(Some(listing_total).filter(|n| *n > 0))
            .unwrap_or(listed as u64);

        let open_deep_wiki_stars = stats.and_then(|s| s.open_deep_wiki_stars).unwrap_or(0);

        Self {
            total_repositories,
            open_deep_wiki_stars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_stat_wins() {
        let stats = HomeStats {
            total_repositories: Some(120),
            open_deep_wiki_stars: Some(9000),
        };
        let display = DisplayStats::resolve(Some(&stats), 40, 20);
        assert_eq!(display.total_repositories, 120);
        assert_eq!(display.open_deep_wiki_stars, 9000);
    }

    #[test]
    fn zero_stat_falls_through_to_listing_total() {
        let stats = HomeStats {
            total_repositories: Some(0),
            open_deep_wiki_stars: None,
        };
        let display = DisplayStats::resolve(Some(&stats), 40, 20);
        assert_eq!(display.total_repositories, 40);
        assert_eq!(display.open_deep_wiki_stars, 0);
    }

    #[test]
    fn list_length_is_last_resort() {
        let display = DisplayStats::resolve(None, 0, 7);
        assert_eq!(display.total_repositories, 7);
    }
}
