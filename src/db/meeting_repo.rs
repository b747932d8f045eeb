use std::path::{Path, PathBuf};

use crate::db::json_file;
use crate::error::MeetResult;
use crate::model::{Meeting, Person};

/// File-backed meeting collection.
///
/// The file is read once in [`MeetingRepo::open`]; after that the in-memory
/// list is authoritative and every mutation rewrites the whole file. Two repos
/// opened on the same path do not see each other's changes.
#[derive(Debug)]
pub struct MeetingRepo {
    path: PathBuf,
    meetings: Vec<Meeting>,
}

impl MeetingRepo {
    pub fn open(path: impl Into<PathBuf>) -> MeetResult<Self> {
        let path = path.into();
        json_file::initialize(&path)?;
        let meetings = json_file::read_meetings(&path)?;
        Ok(Self { path, meetings })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the full collection from the backing file.
    pub fn load_all(&self) -> MeetResult<Vec<Meeting>> {
        json_file::read_meetings(&self.path)
    }

    /// Overwrite the file with `meetings` and make them the cached collection.
    /// On a write failure the cache is left as it was.
    pub fn save_all(&mut self, meetings: Vec<Meeting>) -> MeetResult<()> {
        self.commit(meetings)
    }

    /// The cached collection, in insertion order.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Appends without checking for a duplicate name.
    pub fn insert(&mut self, meeting: Meeting) -> MeetResult<()> {
        let mut next = self.meetings.clone();
        next.push(meeting);
        self.commit(next)
    }

    pub fn remove(&mut self, name: &str) -> MeetResult<bool> {
        let Some(idx) = self.position(name) else {
            return Ok(false);
        };
        let mut next = self.meetings.clone();
        next.remove(idx);
        self.commit(next)?;
        Ok(true)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Returns false without writing when no meeting has that name.
    pub fn add_attendee(&mut self, name: &str, person: Person) -> MeetResult<bool> {
        let Some(idx) = self.position(name) else {
            return Ok(false);
        };
        let mut next = self.meetings.clone();
        next[idx].attendees.push(person);
        self.commit(next)?;
        Ok(true)
    }

    pub fn remove_attendee(&mut self, name: &str, person: &Person) -> MeetResult<bool> {
        let Some(idx) = self.position(name) else {
            return Ok(false);
        };
        let Some(pos) = self.meetings[idx].attendees.iter().position(|p| p == person) else {
            return Ok(false);
        };
        let mut next = self.meetings.clone();
        next[idx].attendees.remove(pos);
        self.commit(next)?;
        Ok(true)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.meetings.iter().position(|m| m.name == name)
    }

    /// Write `next` to the file, then swap it in. The cache only changes
    /// once the file holds the new collection.
    fn commit(&mut self, next: Vec<Meeting>) -> MeetResult<()> {
        json_file::write_meetings(&self.path, &next)?;
        self.meetings = next;
        Ok(())
    }
}
