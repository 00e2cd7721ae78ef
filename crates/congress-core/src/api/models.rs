//! Request parameter types for the Congress.gov API.
//!
//! Responses are kept as `serde_json::Value`; only the values callers pass in
//! are typed, so that a bad choice is rejected before any request is made.

use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Query parameters sent with a request
pub type QueryParams = BTreeMap<String, String>;

/// A decoded JSON object
pub type JsonMap = serde_json::Map<String, Value>;

fn invalid_choice(field: &str, value: &str, allowed: &[&str]) -> ValidationError {
    ValidationError::InvalidChoice {
        field: field.to_string(),
        value: value.to_string(),
        message: format!(
            "'{}' is not valid for '{}'. Must be one of: {}. Please retry with one of these exact string values.",
            value,
            field,
            allowed.join(", ")
        ),
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $wire:literal, $label:literal, $desc:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Name of the parameter this type fills
            pub const FIELD: &'static str = $field;

            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Value as sent to the API
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    $($name::$variant => $desc,)+
                }
            }

            fn wire_values() -> &'static [&'static str] {
                &[$($wire),+]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                $name::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str().to_ascii_lowercase() == normalized)
                    .ok_or_else(|| invalid_choice($field, s, $name::wire_values()))
            }
        }
    };
}

choice_enum! {
    /// Type of bill or resolution
    BillType, "bill_type" {
        Hr => "hr", "House Bill", "Legislation originating in the House";
        S => "s", "Senate Bill", "Legislation originating in the Senate";
        Hjres => "hjres", "House Joint Resolution", "Used for constitutional amendments and continuing resolutions";
        Sjres => "sjres", "Senate Joint Resolution", "Used for constitutional amendments and continuing resolutions";
        Hconres => "hconres", "House Concurrent Resolution", "Expresses congressional sentiment, no force of law";
        Sconres => "sconres", "Senate Concurrent Resolution", "Expresses congressional sentiment, no force of law";
        Hres => "hres", "House Simple Resolution", "Addresses House matters only";
        Sres => "sres", "Senate Simple Resolution", "Addresses Senate matters only";
    }
}

choice_enum! {
    /// Type of amendment
    AmendmentType, "amendment_type" {
        Hamdt => "hamdt", "House Amendment", "An amendment offered in the House";
        Samdt => "samdt", "Senate Amendment", "An amendment offered in the Senate";
        Suamdt => "suamdt", "Senate Unprinted Amendment", "A Senate amendment not printed in the Congressional Record";
    }
}

choice_enum! {
    /// Chamber of Congress
    Chamber, "chamber" {
        House => "house", "House of Representatives", "435 voting members";
        Senate => "senate", "Senate", "100 members, 2 per state";
    }
}

choice_enum! {
    /// Type of enacted law
    LawType, "law_type" {
        Public => "pub", "Public Law", "Affects the general public";
        Private => "priv", "Private Law", "Affects specific individuals or entities";
    }
}

choice_enum! {
    /// Type of committee report
    ReportType, "report_type" {
        Hrpt => "hrpt", "House Report", "Report of a House committee";
        Srpt => "srpt", "Senate Report", "Report of a Senate committee";
        Erpt => "erpt", "Executive Report", "Executive Report (Senate only)";
    }
}

choice_enum! {
    /// Type of communication received by the House
    HouseCommunicationType, "communication_type" {
        Ec => "ec", "Executive Communication", "From executive branch agencies";
        Pm => "pm", "Presidential Message", "From the President";
        Pt => "pt", "Petition", "From citizens or organizations";
        Ml => "ml", "Memorial", "Formal statements from state legislatures";
    }
}

choice_enum! {
    /// Type of communication received by the Senate
    SenateCommunicationType, "communication_type" {
        Ec => "ec", "Executive Communication", "From executive branch agencies";
        Pom => "pom", "Petition or Memorial", "From citizens, organizations, or state legislatures";
        Pm => "pm", "Presidential Message", "From the President";
    }
}

choice_enum! {
    /// Sort order for list endpoints that support it
    SortOrder, "sort" {
        UpdateDateAsc => "updateDate+asc", "Oldest update first", "Sort by update date, ascending";
        UpdateDateDesc => "updateDate+desc", "Newest update first", "Sort by update date, descending";
    }
}

choice_enum! {
    /// Sub-resource lists available under a single bill
    BillSubresource, "subresource" {
        Actions => "actions", "Actions", "Legislative actions taken on the bill";
        Amendments => "amendments", "Amendments", "Amendments to the bill";
        Committees => "committees", "Committees", "Committees the bill was referred to";
        Cosponsors => "cosponsors", "Cosponsors", "Members cosponsoring the bill";
        RelatedBills => "relatedbills", "Related bills", "Bills related to this bill";
        Subjects => "subjects", "Subjects", "Legislative subject terms";
        Summaries => "summaries", "Summaries", "CRS summaries of the bill";
        Text => "text", "Text versions", "Published text versions";
        Titles => "titles", "Titles", "Official and short titles";
    }
}

impl BillSubresource {
    /// Top-level key holding the sub-resource's items
    pub fn result_key(&self) -> &'static str {
        match self {
            BillSubresource::RelatedBills => "relatedBills",
            BillSubresource::Text => "textVersions",
            other => other.as_str(),
        }
    }
}

/// Paging, date-range and sort options shared by list endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    pub limit: Option<u32>,
    pub offset: u32,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub sort: Option<SortOrder>,
}

impl ListOptions {
    pub fn new(limit: Option<u32>, offset: u32) -> Self {
        Self {
            limit,
            offset,
            ..Default::default()
        }
    }

    pub fn with_dates(mut self, from_date: Option<NaiveDate>, to_date: Option<NaiveDate>) -> Self {
        self.from_date = from_date;
        self.to_date = to_date;
        self
    }

    pub fn with_sort(mut self, sort: Option<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    /// Filter parameters; paging is passed to the client separately.
    /// Dates cover whole days in UTC.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(from) = self.from_date {
            params.insert(
                "fromDateTime".to_string(),
                format!("{}T00:00:00Z", from.format("%Y-%m-%d")),
            );
        }
        if let Some(to) = self.to_date {
            params.insert(
                "toDateTime".to_string(),
                format!("{}T23:59:59Z", to.format("%Y-%m-%d")),
            );
        }
        if let Some(sort) = self.sort {
            params.insert("sort".to_string(), sort.as_str().to_string());
        }
        params
    }
}
