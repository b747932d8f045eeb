use log::{info, warn};

use crate::db::MeetingRepo;
use crate::error::{MeetError, MeetResult};
use crate::model::{Meeting, Person};

/// Result of a successful attendee addition.
#[derive(Debug, Clone)]
pub struct AttendeeAdded {
    pub meeting: Meeting,
    /// Names of the person's other meetings that clash with this one.
    /// Informational only; the person was added regardless.
    pub conflicts: Vec<String>,
}

impl AttendeeAdded {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Business rules over a [`MeetingRepo`] on behalf of the logged-in person.
pub struct MeetingManager {
    repo: MeetingRepo,
    current_person: Person,
}

impl MeetingManager {
    pub fn new(repo: MeetingRepo, current_person: Person) -> Self {
        Self {
            repo,
            current_person,
        }
    }

    pub fn repo(&self) -> &MeetingRepo {
        &self.repo
    }

    pub fn current_person(&self) -> &Person {
        &self.current_person
    }

    pub fn into_repo(self) -> MeetingRepo {
        self.repo
    }

    pub fn add_meeting(&mut self, meeting: Meeting) -> MeetResult<Meeting> {
        if self.repo.contains(&meeting.name) {
            info!("rejected meeting {:?}: name already taken", meeting.name);
            return Err(MeetError::AlreadyExists {
                entity_type: "Meeting".into(),
                identifier: meeting.name,
            });
        }

        self.repo.insert(meeting.clone())?;
        info!("created meeting {:?}", meeting.name);
        Ok(meeting)
    }

    pub fn delete_meeting(&mut self, name: &str) -> MeetResult<Meeting> {
        let meeting = self.find(name)?.clone();

        if !meeting.is_responsible(&self.current_person) {
            info!(
                "{} may not delete meeting {:?}",
                self.current_person, meeting.name
            );
            return Err(MeetError::NotResponsible {
                meeting: meeting.name,
            });
        }

        if !self.repo.remove(name)? {
            return Err(MeetError::meeting_not_found(name));
        }
        info!("deleted meeting {:?}", name);
        Ok(meeting)
    }

    pub fn add_person_to_meeting(&mut self, name: &str, person: Person) -> MeetResult<AttendeeAdded> {
        let meeting = self.find(name)?;

        if meeting.has_attendee(&person) || meeting.is_responsible(&person) {
            info!("{} is already part of meeting {:?}", person, name);
            return Err(MeetError::AlreadyAttending {
                person: person.to_string(),
                meeting: name.to_string(),
            });
        }

        let conflicts: Vec<String> = self
            .repo
            .meetings()
            .iter()
            .filter(|other| other.has_attendee(&person) && meeting.clashes_with(other))
            .map(|other| other.name.clone())
            .collect();

        if !conflicts.is_empty() {
            warn!(
                "{} has other meetings at the time of {:?}: {}",
                person,
                name,
                conflicts.join(", ")
            );
        }

        let label = person.to_string();
        if !self.repo.add_attendee(name, person)? {
            return Err(MeetError::meeting_not_found(name));
        }
        info!("added {} to meeting {:?}", label, name);

        let meeting = self.find(name)?.clone();
        Ok(AttendeeAdded { meeting, conflicts })
    }

    pub fn remove_person_from_meeting(&mut self, name: &str, person: &Person) -> MeetResult<Meeting> {
        let meeting = self.find(name)?;

        if meeting.is_responsible(person) {
            info!("refused to remove responsible person from {:?}", name);
            return Err(MeetError::CannotRemoveResponsible {
                meeting: name.to_string(),
            });
        }

        if !self.repo.remove_attendee(name, person)? {
            info!("{} is not assigned to meeting {:?}", person, name);
            return Err(MeetError::NotAttending {
                person: person.to_string(),
                meeting: name.to_string(),
            });
        }
        info!("removed {} from meeting {:?}", person, name);

        Ok(self.find(name)?.clone())
    }

    fn find(&self, name: &str) -> MeetResult<&Meeting> {
        self.repo
            .find_by_name(name)
            .ok_or_else(|| MeetError::meeting_not_found(name))
    }
}
