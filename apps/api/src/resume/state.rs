use serde::Serialize;

use crate::picture::EncodedImage;
use crate::resume::entries::EntryList;
use crate::resume::fields::{
    CollectionKind, EducationField, ExperienceField, ScalarField, StateError,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub year: String,
}

impl EducationEntry {
    fn with_field(&self, field: EducationField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            EducationField::School => next.school = value,
            EducationField::Degree => next.degree = value,
            EducationField::Year => next.year = value,
        }
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

impl ExperienceEntry {
    fn with_field(&self, field: ExperienceField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ExperienceField::Company => next.company = value,
            ExperienceField::Position => next.position = value,
            ExperienceField::Duration => next.duration = value,
            ExperienceField::Description => next.description = value,
        }
        next
    }
}

/// One immutable snapshot of the résumé form.
///
/// Every operation borrows the current snapshot and returns a new one. Cloning
/// is cheap: collections are shared and only the touched entry is rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub summary: String,
    pub picture: Option<EncodedImage>,
    pub education: EntryList<EducationEntry>,
    pub experience: EntryList<ExperienceEntry>,
    pub skills: EntryList<String>,
    pub languages: EntryList<String>,
}

impl ResumeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Email => &self.email,
            ScalarField::Phone => &self.phone,
            ScalarField::Address => &self.address,
            ScalarField::Summary => &self.summary,
        }
    }

    pub fn set_scalar_field(&self, field: ScalarField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ScalarField::Name => next.name = value,
            ScalarField::Email => next.email = value,
            ScalarField::Phone => next.phone = value,
            ScalarField::Address => next.address = value,
            ScalarField::Summary => next.summary = value,
        }
        next
    }

    /// Sets one named field of one education or experience entry.
    /// `field_name` must belong to the collection's own field set.
    pub fn set_collection_entry_field(
        &self,
        collection: CollectionKind,
        index: usize,
        field_name: &str,
        value: impl Into<String>,
    ) -> Result<Self, StateError> {
        match collection {
            CollectionKind::Education => {
                self.set_education_field(index, field_name.parse()?, value)
            }
            CollectionKind::Experience => {
                self.set_experience_field(index, field_name.parse()?, value)
            }
        }
    }

    pub fn set_education_field(
        &self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<Self, StateError> {
        let value = value.into();
        let education = self
            .education
            .replaced(index, |entry| entry.with_field(field, value))
            .ok_or(StateError::IndexOutOfRange {
                collection: "education",
                index,
                len: self.education.len(),
            })?;
        Ok(Self {
            education,
            ..self.clone()
        })
    }

    pub fn set_experience_field(
        &self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<Self, StateError> {
        let value = value.into();
        let experience = self
            .experience
            .replaced(index, |entry| entry.with_field(field, value))
            .ok_or(StateError::IndexOutOfRange {
                collection: "experience",
                index,
                len: self.experience.len(),
            })?;
        Ok(Self {
            experience,
            ..self.clone()
        })
    }

    pub fn append_collection_entry(&self, collection: CollectionKind) -> Self {
        let mut next = self.clone();
        match collection {
            CollectionKind::Education => {
                next.education = self.education.pushed(EducationEntry::default())
            }
            CollectionKind::Experience => {
                next.experience = self.experience.pushed(ExperienceEntry::default())
            }
        }
        next
    }

    pub fn set_skill(&self, index: usize, value: impl Into<String>) -> Result<Self, StateError> {
        let skills = replace_text(&self.skills, "skills", index, value.into())?;
        Ok(Self {
            skills,
            ..self.clone()
        })
    }

    pub fn append_skill(&self) -> Self {
        Self {
            skills: self.skills.pushed(String::new()),
            ..self.clone()
        }
    }

    pub fn set_language(&self, index: usize, value: impl Into<String>) -> Result<Self, StateError> {
        let languages = replace_text(&self.languages, "languages", index, value.into())?;
        Ok(Self {
            languages,
            ..self.clone()
        })
    }

    pub fn append_language(&self) -> Self {
        Self {
            languages: self.languages.pushed(String::new()),
            ..self.clone()
        }
    }

    pub fn with_picture(&self, picture: EncodedImage) -> Self {
        Self {
            picture: Some(picture),
            ..self.clone()
        }
    }
}

fn replace_text(
    list: &EntryList<String>,
    collection: &'static str,
    index: usize,
    value: String,
) -> Result<EntryList<String>, StateError> {
    list.replaced(index, |_| value)
        .ok_or(StateError::IndexOutOfRange {
            collection,
            index,
            len: list.len(),
        })
}
