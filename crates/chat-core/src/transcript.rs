//! Transcript-related types.

use std::borrow::Cow;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Who wrote an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person typing.
    User,
    /// The assistant, or the engine speaking on its behalf.
    Bot,
}

/// An entry in the transcript.
///
/// The text is stored exactly as it was typed or received. Use
/// [`TranscriptEntry::rendered_text`] to get what should be displayed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranscriptEntry {
    text: String,
    sender: Sender,
    #[serde(rename = "time")]
    timestamp: String,
}

impl TranscriptEntry {
    /// Creates an entry, typically when restoring a saved transcript.
    #[inline]
    pub fn new<S1: Into<String>, S2: Into<String>>(
        text: S1,
        sender: Sender,
        timestamp: S2,
    ) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: timestamp.into(),
        }
    }

    /// Returns the raw text of this entry.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns who wrote this entry.
    #[inline]
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Returns the human-readable time the exchange started.
    #[inline]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the text as it should be displayed.
    ///
    /// Bot entries go through [`normalize`], user entries are shown as
    /// typed. Normalization is never written back into the entry, so a
    /// saved and reloaded transcript renders exactly the same.
    pub fn rendered_text(&self) -> Cow<'_, str> {
        match self.sender {
            Sender::User => Cow::Borrowed(&self.text),
            Sender::Bot => Cow::Owned(normalize(&self.text)),
        }
    }
}

/// The ordered entries of one conversation.
///
/// Entries are only ever appended. The one exception is replacing the
/// text of the last entry, which the engine does for progressive updates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in chronological order.
    #[inline]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, TranscriptEntry> {
        self.entries.iter()
    }

    /// Returns the most recent entry.
    #[inline]
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    #[inline]
    pub(crate) fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// Returns `false` if there was nothing to replace.
    pub(crate) fn replace_last_text(&mut self, text: String) -> bool {
        match self.entries.last_mut() {
            Some(entry) => {
                entry.text = text;
                true
            }
            None => false,
        }
    }
}

impl FromIterator<TranscriptEntry> for Transcript {
    fn from_iter<I: IntoIterator<Item = TranscriptEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptEntry;
    type IntoIter = slice::Iter<'a, TranscriptEntry>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
