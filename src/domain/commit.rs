use regex::Regex;
use serde::Serialize;

use crate::config::ParserConfig;
use crate::error::{BumpCheckError, Result};
use crate::git::RawCommit;

/// `type(scope): subject`, scope optional.
const HEADER_PATTERN: &str = r"^(?P<type>\w*)(?:\((?P<scope>.*)\))?: (?P<subject>.*)$";

/// Header grammar with an optional `!` before the colon, used when `breaking_header` is on.
const BANG_HEADER_PATTERN: &str =
    r"^(?P<type>\w*)(?:\((?P<scope>.*)\))?(?P<bang>!)?: (?P<subject>.*)$";

/// Title given to notes produced by a `!` in the header.
const HEADER_NOTE_TITLE: &str = "BREAKING CHANGE";

/// A breaking-change annotation found in a commit message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// The keyword that introduced the note (e.g. "BREAKING CHANGE")
    pub title: String,
    /// Free text following the keyword, continuation lines included
    pub text: String,
}

/// Structured representation of one commit message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    pub hash: String,
    /// `None` when the header does not follow the conventional grammar
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub header: String,
    pub body: Option<String>,
    pub notes: Vec<Note>,
}

impl CommitRecord {
    /// A record with notes is a breaking change whatever its type.
    pub fn is_breaking(&self) -> bool {
        !self.notes.is_empty()
    }

    pub fn is_conventional(&self) -> bool {
        self.r#type.is_some()
    }
}

/// Converts raw commit messages into [CommitRecord]s.
///
/// Parsing is stateless across commits and never fails: messages that do not follow
/// the header grammar produce a record with no type.
#[derive(Debug, Clone)]
pub struct CommitParser {
    header: Regex,
    note: Option<Regex>,
    breaking_header: bool,
}

impl CommitParser {
    pub fn new(config: &ParserConfig) -> Result<Self> {
        let pattern = if config.breaking_header {
            BANG_HEADER_PATTERN
        } else {
            HEADER_PATTERN
        };
        let header = Regex::new(pattern)
            .map_err(|e| BumpCheckError::config(format!("Invalid header pattern: {}", e)))?;

        let keywords: Vec<String> = config
            .note_keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .map(|k| regex::escape(k.trim()))
            .collect();
        // An empty alternation would match every line. Keywords match in any case.
        let note = if keywords.is_empty() {
            None
        } else {
            let pattern = format!(r"(?i)^[\s|*]*({})[:\s]+(.*)", keywords.join("|"));
            let re = Regex::new(&pattern)
                .map_err(|e| BumpCheckError::config(format!("Invalid note keyword: {}", e)))?;
            Some(re)
        };

        Ok(CommitParser {
            header,
            note,
            breaking_header: config.breaking_header,
        })
    }

    pub fn parse(&self, raw: &RawCommit) -> CommitRecord {
        let message = raw.message.trim();
        let mut lines = message.lines();
        let header = lines.next().unwrap_or_default().trim_end().to_string();

        let mut body_lines: Vec<&str> = Vec::new();
        let mut notes: Vec<Note> = Vec::new();
        for line in lines {
            if let Some(captures) = self.note.as_ref().and_then(|re| re.captures(line)) {
                notes.push(Note {
                    title: captures[1].to_string(),
                    text: captures[2].to_string(),
                });
            } else if let Some(note) = notes.last_mut() {
                note.text.push('\n');
                note.text.push_str(line);
            } else {
                body_lines.push(line);
            }
        }
        for note in &mut notes {
            note.text = note.text.trim().to_string();
        }

        let body = Some(body_lines.join("\n").trim().to_string()).filter(|b| !b.is_empty());

        let mut record = CommitRecord {
            hash: raw.hash.clone(),
            r#type: None,
            scope: None,
            subject: None,
            header,
            body,
            notes,
        };

        if let Some(captures) = self.header.captures(&record.header) {
            record.r#type = captures
                .name("type")
                .map(|m| m.as_str().to_string())
                .filter(|t| !t.is_empty());
            record.scope = captures.name("scope").map(|m| m.as_str().to_string());
            let subject = captures.name("subject").map(|m| m.as_str().to_string());
            let bang = captures.name("bang").is_some();

            if bang && self.breaking_header && record.notes.is_empty() {
                record.notes.push(Note {
                    title: HEADER_NOTE_TITLE.to_string(),
                    text: subject.clone().unwrap_or_default(),
                });
            }
            record.subject = subject;
        }

        record
    }

    /// Parse a whole commit sequence, stopping at the first read error.
    ///
    /// Records parsed before the error are dropped.
    pub fn parse_all<I>(&self, commits: I) -> Result<Vec<CommitRecord>>
    where
        I: IntoIterator<Item = Result<RawCommit>>,
    {
        commits
            .into_iter()
            .map(|commit| commit.map(|c| self.parse(&c)))
            .collect()
    }
}
