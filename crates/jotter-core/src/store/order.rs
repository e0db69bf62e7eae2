//! Ordering tokens accepted by note search

pub const ORDER_BY_ASC_DATE_UPDATED: &str = "+updated_at";
pub const ORDER_BY_DESC_DATE_UPDATED: &str = "-updated_at";
pub const ORDER_BY_ASC_TITLE: &str = "+title";
pub const ORDER_BY_DESC_TITLE: &str = "-title";

/// Sort order for a search page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteOrder {
    UpdatedAsc,
    #[default]
    UpdatedDesc,
    TitleAsc,
    TitleDesc,
}

impl NoteOrder {
    /// Parse an ordering token; unknown or blank tokens fall back to newest first
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            ORDER_BY_ASC_DATE_UPDATED => Self::UpdatedAsc,
            ORDER_BY_ASC_TITLE => Self::TitleAsc,
            ORDER_BY_DESC_TITLE => Self::TitleDesc,
            _ => Self::UpdatedDesc,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::UpdatedAsc => ORDER_BY_ASC_DATE_UPDATED,
            Self::UpdatedDesc => ORDER_BY_DESC_DATE_UPDATED,
            Self::TitleAsc => ORDER_BY_ASC_TITLE,
            Self::TitleDesc => ORDER_BY_DESC_TITLE,
        }
    }

    /// `ORDER BY` clause for the `SQLite` store
    pub(crate) const fn sql(self) -> &'static str {
        match self {
            Self::UpdatedAsc => "updated_at ASC, id ASC",
            Self::UpdatedDesc => "updated_at DESC, id ASC",
            Self::TitleAsc => "title COLLATE NOCASE ASC, id ASC",
            Self::TitleDesc => "title COLLATE NOCASE DESC, id ASC",
        }
    }
}
