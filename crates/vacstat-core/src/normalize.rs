use crate::domain::PostingBuilder;

/// Recognized CSV columns.
///
/// Anything else in the header maps to `None` and is ignored, which keeps
/// the loader forward compatible with extra columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Name,
    SalaryFrom,
    SalaryTo,
    SalaryCurrency,
    AreaName,
    PublishedAt,
}

impl ColumnKind {
    pub fn from_header(label: &str) -> Option<Self> {
        match label.trim() {
            "name" => Some(Self::Name),
            "salary_from" => Some(Self::SalaryFrom),
            "salary_to" => Some(Self::SalaryTo),
            "salary_currency" => Some(Self::SalaryCurrency),
            "area_name" => Some(Self::AreaName),
            "published_at" => Some(Self::PublishedAt),
            _ => None,
        }
    }

    /// Cleans `raw` and stores it in the matching builder slot.
    pub fn apply(self, builder: &mut PostingBuilder, raw: &str) {
        let value = clean_text(raw);
        match self {
            Self::Name => builder.name(value),
            Self::SalaryFrom => builder.salary_from(value),
            Self::SalaryTo => builder.salary_to(value),
            Self::SalaryCurrency => builder.salary_currency(value),
            Self::AreaName => builder.area_name(value),
            Self::PublishedAt => builder.published_at(value),
        }
    }
}

/// Strips HTML-like `<...>` tags, then collapses whitespace runs to single
/// spaces and trims.
pub fn clean_text(s: &str) -> String {
    let mut stripped = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
