use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::person::Person;
use crate::error::MeetError;

/// What kind of meeting it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingCategory {
    CodeMonkey,
    Hub,
    Short,
    TeamBuilding,
}

impl MeetingCategory {
    pub const ALL: &'static [MeetingCategory] = &[
        MeetingCategory::CodeMonkey,
        MeetingCategory::Hub,
        MeetingCategory::Short,
        MeetingCategory::TeamBuilding,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MeetingCategory::CodeMonkey => "CodeMonkey",
            MeetingCategory::Hub => "Hub",
            MeetingCategory::Short => "Short",
            MeetingCategory::TeamBuilding => "TeamBuilding",
        }
    }
}

impl FromStr for MeetingCategory {
    type Err = MeetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MeetingCategory::ALL
            .iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| MeetError::InvalidValue {
                field: "category".into(),
                value: s.to_string(),
            })
    }
}

/// Whether the meeting happens online or in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingType {
    Live,
    InPerson,
}

impl MeetingType {
    pub const ALL: &'static [MeetingType] = &[MeetingType::Live, MeetingType::InPerson];

    pub fn display_name(&self) -> &'static str {
        match self {
            MeetingType::Live => "Live",
            MeetingType::InPerson => "InPerson",
        }
    }
}

impl FromStr for MeetingType {
    type Err = MeetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MeetingType::ALL
            .iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| MeetError::InvalidValue {
                field: "type".into(),
                value: s.to_string(),
            })
    }
}

/// A scheduled meeting. `name` is its identity within a store; two records
/// with the same name are the same meeting regardless of other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Meeting {
    pub name: String,
    pub responsible_person: Person,
    pub description: String,
    pub category: MeetingCategory,
    #[serde(rename = "Type")]
    pub meeting_type: MeetingType,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub attendees: Vec<Person>,
}

impl Meeting {
    /// Creates a meeting with no attendees.
    pub fn create(
        name: String,
        responsible_person: Person,
        description: String,
        category: MeetingCategory,
        meeting_type: MeetingType,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Self {
        Self {
            name,
            responsible_person,
            description,
            category,
            meeting_type,
            start_date,
            end_date,
            attendees: Vec::new(),
        }
    }

    pub fn is_responsible(&self, person: &Person) -> bool {
        self.responsible_person == *person
    }

    pub fn has_attendee(&self, person: &Person) -> bool {
        self.attendees.contains(person)
    }

    /// Schedule clash test used for the attendee overlap warning.
    ///
    /// Kept exactly as `!(other.start > self.end || self.start < other.end)`.
    /// This is not a symmetric interval intersection: it only holds when
    /// `other` starts no later than `self` ends and `self` starts at or after
    /// `other` ends.
    pub fn clashes_with(&self, other: &Meeting) -> bool {
        !(other.start_date > self.end_date || self.start_date < other.end_date)
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: \t{}", self.name)?;
        writeln!(f, "Responsible person: \t{}", self.responsible_person)?;
        writeln!(f, "Description: \t{}", self.description)?;
        writeln!(f, "Category: \t{}", self.category.display_name())?;
        writeln!(f, "Type: \t{}", self.meeting_type.display_name())?;
        writeln!(f, "Start date: \t{}", self.start_date.format("%Y-%m-%d %H:%M"))?;
        writeln!(f, "End date: \t{}", self.end_date.format("%Y-%m-%d %H:%M"))?;
        writeln!(f, "Attendees: \t{}", self.attendees.len())?;
        write!(f, "------------------------------------------")
    }
}
