//! Parent-chain history walk
//!
//! `RevWalk` lazily follows `parent` links from a starting commit, yielding
//! commits newest first. The walk ends at a root commit, or early when a
//! referenced commit object is missing from the database. The early stop
//! tolerates partial histories instead of failing, but it is not silent: the
//! `truncated` flag records it so callers can tell a complete walk from a
//! truncated one.

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

pub struct RevWalk<'a> {
    database: &'a Database,
    next: Option<ObjectId>,
    truncated: bool,
}

impl<'a> RevWalk<'a> {
    /// Start a fresh walk from the given commit; not restartable mid-walk
    pub fn new(database: &'a Database, start: ObjectId) -> Self {
        RevWalk {
            database,
            next: Some(start),
            truncated: false,
        }
    }

    /// Whether the walk ended on a missing commit object rather than a root.
    /// Only meaningful after the iterator has been exhausted.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl Iterator for RevWalk<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next.take()?;

        if !self.database.contains_commit(&oid) {
            self.truncated = true;
            return None;
        }

        match self.database.load_commit(&oid) {
            Ok(commit) => {
                self.next = commit.parent().cloned();
                Some(Ok((oid, commit)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
