use common::model::resume::ResumeRecord;

use crate::api::ApiError;

pub enum Msg {
    Loaded(Result<Vec<ResumeRecord>, ApiError>),
    Open(String, String),
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    DeleteFinished(String, Result<(), ApiError>),
    Duplicate(String),
    DuplicateFinished(Result<Box<ResumeRecord>, ApiError>),
    StartRename(String),
    RenameInput(String),
    CancelRename,
    CommitRename,
    RenameFinished(Result<Box<ResumeRecord>, ApiError>),
    DismissError,
}
