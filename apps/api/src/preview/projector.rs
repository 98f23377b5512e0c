use crate::preview::view_model::{
    ContactBlock, EducationView, ExperienceView, PictureView, PreviewViewModel,
};
use crate::resume::{EducationEntry, EntryList, ExperienceEntry, ResumeState};

/// Projects a snapshot into its preview. Pure and total.
///
/// Section rules:
/// - education / experience: shown when the list is non-empty, every entry
///   listed even if blank
/// - skills: shown only when the *first* skill is non-blank; inside, blank
///   skills are skipped
/// - languages: shown when any language is non-blank; blank ones skipped
pub fn project(state: &ResumeState) -> PreviewViewModel {
    PreviewViewModel {
        contact: ContactBlock {
            name: state.name.clone(),
            email: state.email.clone(),
            phone: state.phone.clone(),
            address: state.address.clone(),
        },
        profile: state.summary.clone(),
        picture: state.picture.as_ref().map(|src| PictureView {
            src: src.clone(),
            alt: state.name.clone(),
        }),
        education: list_section(&state.education, education_view),
        experience: list_section(&state.experience, experience_view),
        skills: skills_section(&state.skills),
        languages: languages_section(&state.languages),
    }
}

fn list_section<T, V>(entries: &EntryList<T>, view: impl Fn(&T) -> V) -> Option<Vec<V>> {
    if entries.is_empty() {
        return None;
    }
    Some(entries.iter().map(view).collect())
}

fn skills_section(skills: &EntryList<String>) -> Option<Vec<String>> {
    // Gated on the first skill only; a blank first skill hides the block even
    // when later skills are filled in.
    if skills.is_empty() || skills.first().is_empty() {
        return None;
    }
    Some(non_blank(skills))
}

fn languages_section(languages: &EntryList<String>) -> Option<Vec<String>> {
    let filled = non_blank(languages);
    if filled.is_empty() {
        return None;
    }
    Some(filled)
}

fn non_blank(list: &EntryList<String>) -> Vec<String> {
    list.iter().filter(|s| !s.is_empty()).cloned().collect()
}

fn education_view(entry: &EducationEntry) -> EducationView {
    EducationView {
        school: entry.school.clone(),
        degree: entry.degree.clone(),
        year: entry.year.clone(),
    }
}

fn experience_view(entry: &ExperienceEntry) -> ExperienceView {
    ExperienceView {
        company: entry.company.clone(),
        position: entry.position.clone(),
        duration: entry.duration.clone(),
        description: entry.description.clone(),
    }
}
