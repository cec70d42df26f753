use common::model::resume::ResumeRecord;
use common::requests::LoginResponse;

use crate::api::ApiError;

#[derive(Clone, Copy, PartialEq)]
pub enum Field {
    Name,
    Role,
    Phone,
    Email,
    Linkedin,
    Location,
    Summary,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ExpField {
    Title,
    Company,
    Date,
    Location,
    Accomplishment,
}

#[derive(Clone, Copy, PartialEq)]
pub enum EduField {
    Degree,
    Institution,
    Duration,
    Location,
}

#[derive(Clone, Copy, PartialEq)]
pub enum AchField {
    Heading,
    Describe,
}

pub enum Msg {
    Hydrate(Box<ResumeRecord>),
    Loaded(Result<Box<ResumeRecord>, ApiError>),
    OwnershipResolved(Result<bool, ApiError>),
    Edit(Field, String),
    EditExperience(usize, ExpField, String),
    AddExperience,
    RemoveExperience(usize),
    EditEducation(usize, EduField, String),
    AddEducation,
    RemoveEducation(usize),
    EditAchievement(usize, AchField, String),
    AddAchievement,
    RemoveAchievement(usize),
    EditLanguageName(usize, String),
    EditLanguageLevel(usize, String),
    SetLanguageDots(usize, u8),
    AddLanguage,
    RemoveLanguage(usize),
    EditSkillCategory(usize, String),
    EditSkillItems(usize, String),
    AddSkillCategory,
    RemoveSkillCategory(usize),
    SetTheme(String),
    Save,
    NameInput(String),
    ConfirmName,
    CancelName,
    SaveFinished(Result<Box<ResumeRecord>, ApiError>),
    AutoSave(u32),
    AutoSaved(Result<Box<ResumeRecord>, ApiError>),
    Download,
    BestEffortSaved(Result<Box<ResumeRecord>, ApiError>),
    LoginEmail(String),
    LoginPassword(String),
    SubmitLogin,
    CancelLogin,
    LoginFinished(Result<Box<LoginResponse>, ApiError>),
    DismissError,
    Back,
}
