use serde::Serialize;

use crate::picture::EncodedImage;

/// Render-ready preview of the résumé. A `None` section is not rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewViewModel {
    pub contact: ContactBlock,
    pub profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<PictureView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactBlock {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PictureView {
    pub src: EncodedImage,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub school: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}
