//! Certificate aggregate entity.
//!
//! A company certificate displayed on the site, grouped into sections.
//! The natural key is the `title` scoped by `section`: two live
//! certificates may share a title only when they sit in different
//! sections.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CertificateId, ImageUrl, Slug, Timestamp, Title};

/// Certificate aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    id: CertificateId,
    title: Title,
    section: Slug,
    image_url: Option<ImageUrl>,
    shown: bool,
    order: i32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Certificate {
    /// Creates a new certificate with a fresh id and timestamps.
    pub fn new(title: Title, section: Slug, image_url: Option<ImageUrl>) -> Self {
        let now = Timestamp::now();
        Self {
            id: CertificateId::new(),
            title,
            section,
            image_url,
            shown: true,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a certificate from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CertificateId,
        title: Title,
        section: Slug,
        image_url: Option<ImageUrl>,
        shown: bool,
        order: i32,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            section,
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

    pub fn id(&self) -> &CertificateId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn section(&self) -> &Slug {
        &self.section
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

    /// Refreshes `updated_at`, guaranteeing strictly forward movement.
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
