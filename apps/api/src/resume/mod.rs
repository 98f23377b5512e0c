// Résumé form state: immutable snapshots and the pure operations over them.
// Operations never mutate in place; each returns a new snapshot that shares
// every untouched field and entry with its predecessor.

pub mod command;
pub mod entries;
pub mod fields;
pub mod state;

pub use command::FormCommand;
pub use entries::EntryList;
pub use fields::{CollectionKind, EducationField, ExperienceField, ScalarField, StateError};
pub use state::{EducationEntry, ExperienceEntry, ResumeState};
