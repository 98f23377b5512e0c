use serde::{Deserialize, Serialize};

use crate::resume::fields::{CollectionKind, StateError};
use crate::resume::state::ResumeState;

/// One form event. Every edit the UI can make is expressed as a command and
/// goes through [`ResumeState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormCommand {
    SetField {
        field: String,
        value: String,
    },
    SetEntryField {
        collection: CollectionKind,
        index: usize,
        field: String,
        value: String,
    },
    AddEntry {
        collection: CollectionKind,
    },
    SetSkill {
        index: usize,
        value: String,
    },
    AddSkill,
    SetLanguage {
        index: usize,
        value: String,
    },
    AddLanguage,
}

impl FormCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            FormCommand::SetField { .. } => "set_field",
            FormCommand::SetEntryField { .. } => "set_entry_field",
            FormCommand::AddEntry { .. } => "add_entry",
            FormCommand::SetSkill { .. } => "set_skill",
            FormCommand::AddSkill => "add_skill",
            FormCommand::SetLanguage { .. } => "set_language",
            FormCommand::AddLanguage => "add_language",
        }
    }
}

impl ResumeState {
    pub fn apply(&self, command: &FormCommand) -> Result<ResumeState, StateError> {
        match command {
            FormCommand::SetField { field, value } => {
                Ok(self.set_scalar_field(field.parse()?, value.as_str()))
            }
            FormCommand::SetEntryField {
                collection,
                index,
                field,
                value,
            } => self.set_collection_entry_field(*collection, *index, field, value.as_str()),
            FormCommand::AddEntry { collection } => Ok(self.append_collection_entry(*collection)),
            FormCommand::SetSkill { index, value } => self.set_skill(*index, value.as_str()),
            FormCommand::AddSkill => Ok(self.append_skill()),
            FormCommand::SetLanguage { index, value } => self.set_language(*index, value.as_str()),
            FormCommand::AddLanguage => Ok(self.append_language()),
        }
    }
}
