use chrono::NaiveDateTime;

use crate::model::{Meeting, MeetingCategory, MeetingType, Person};

/// Listing filters offered by the `list` command.
#[derive(Debug, Clone, PartialEq)]
pub enum MeetingFilter {
    All,
    /// Case-sensitive substring of the description.
    Description(String),
    ResponsiblePerson(Person),
    Category(MeetingCategory),
    Type(MeetingType),
    /// Meetings starting at or after `from`, and ending at or before `to` if given.
    Dates {
        from: NaiveDateTime,
        to: Option<NaiveDateTime>,
    },
    MinAttendees(usize),
}

impl MeetingFilter {
    pub fn matches(&self, meeting: &Meeting) -> bool {
        match self {
            MeetingFilter::All => true,
            MeetingFilter::Description(keyword) => meeting.description.contains(keyword.as_str()),
            MeetingFilter::ResponsiblePerson(person) => meeting.responsible_person == *person,
            MeetingFilter::Category(category) => meeting.category == *category,
            MeetingFilter::Type(meeting_type) => meeting.meeting_type == *meeting_type,
            MeetingFilter::Dates { from, to } => {
                meeting.start_date >= *from && to.map_or(true, |to| meeting.end_date <= to)
            }
            MeetingFilter::MinAttendees(n) => meeting.attendees.len() >= *n,
        }
    }
}

pub fn filter<'a>(meetings: &'a [Meeting], filter: &MeetingFilter) -> Vec<&'a Meeting> {
    meetings.iter().filter(|m| filter.matches(m)).collect()
}

