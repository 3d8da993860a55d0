//! News aggregate entity.
//!
//! A news entry published on the company site. The `slug` is the
//! natural key: it must be unique among all live entries, which the
//! [`NewsService`](super::NewsService) enforces.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ImageUrl, NewsId, Slug, Timestamp, Title};

/// News aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `slug` is unique among live entries (service-enforced)
/// - `updated_at` never moves backwards across updates of the same id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    id: NewsId,
    slug: Slug,
    title: Title,
    body: String,
    image_url: Option<ImageUrl>,
    shown: bool,
    order: i32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl News {
    /// Creates a new news entry with a fresh id and timestamps.
    ///
    /// Defaults: `shown = true`, `order = 0`.
    pub fn new(slug: Slug, title: Title, body: String, image_url: Option<ImageUrl>) -> Self {
        let now = Timestamp::now();
        Self {
            id: NewsId::new(),
            slug,
            title,
            body,
            image_url,
            shown: true,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a news entry from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: NewsId,
        slug: Slug,
        title: Title,
        body: String,
        image_url: Option<ImageUrl>,
        shown: bool,
        order: i32,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            slug,
            title,
            body,
            image_url,
            shown,
            order,
            created_at,
            updated_at,
        }
    }

    /// Builder: set visibility.
    pub fn with_shown(mut self, shown: bool) -> Self {
        self.shown = shown;
        self
    }

    /// Builder: set manual ordering weight.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &NewsId {
        &self.id
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn image_url(&self) -> Option<&ImageUrl> {
        self.image_url.as_ref()
    }

    pub fn shown(&self) -> bool {
        self.shown
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Refreshes `updated_at`, guaranteeing it moves strictly forward
    /// even when the clock has not advanced since the last write.
    pub fn touch(&mut self) {
        let now = Timestamp::now();
        self.updated_at = if now.is_after(&self.updated_at) {
            now
        } else {
            Timestamp::from_datetime(
                *self.updated_at.as_datetime() + chrono::Duration::microseconds(1),
            )
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_news(slug: &str) -> News {
        News::new(
            Slug::new(slug).unwrap(),
            Title::new("Company update").unwrap(),
            "Body text".to_string(),
            None,
        )
    }

    #[test]
    fn new_entry_defaults_shown_and_order() {
        let news = test_news("update");
        assert!(news.shown());
        assert_eq!(news.order(), 0);
    }

    #[test]
    fn new_entry_sets_equal_timestamps() {
        let news = test_news("update");
        assert_eq!(news.created_at(), news.updated_at());
    }

    #[test]
    fn builder_overrides_defaults() {
        let news = test_news("update").with_shown(false).with_order(7);
        assert!(!news.shown());
        assert_eq!(news.order(), 7);
    }

    #[test]
    fn touch_advances_updated_at() {
        let mut news = test_news("update");
        let before = *news.updated_at();
        news.touch();
        assert!(news.updated_at().is_after(&before));
    }

    #[test]
    fn touch_is_monotonic_across_repeated_calls() {
        let mut news = test_news("update");
        let mut last = *news.updated_at();
        for _ in 0..10 {
            news.touch();
            assert!(news.updated_at().is_after(&last));
            last = *news.updated_at();
        }
    }

    #[test]
    fn reconstitute_preserves_all_fields() {
        let original = test_news("round-trip").with_order(3);
        let copy = News::reconstitute(
            *original.id(),
            original.slug().clone(),
            original.title().clone(),
            original.body().to_string(),
            None,
            original.shown(),
            original.order(),
            *original.created_at(),
            *original.updated_at(),
        );
        assert_eq!(original, copy);
    }
}
