use super::super::traits::FloorError;
use shared::floor::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManagerError {
    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("Reservation already exists: {0}")]
    DuplicateReservation(String),

    #[error("Table is already occupied: {0}")]
    TableOccupied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ManagerError {
    pub fn code(&self) -> CommandErrorCode {
        match self {
            ManagerError::ReservationNotFound(_) => CommandErrorCode::ReservationNotFound,
            ManagerError::DuplicateReservation(_) => CommandErrorCode::DuplicateReservation,
            ManagerError::TableOccupied(_) => CommandErrorCode::TableOccupied,
            ManagerError::InvalidInput(_) => CommandErrorCode::InvalidInput,
            ManagerError::PermissionDenied(_) => CommandErrorCode::PermissionDenied,
            ManagerError::Internal(_) => CommandErrorCode::InternalError,
        }
    }
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        if let ManagerError::Internal(msg) = &err {
            tracing::error!(error = %msg, "Internal floor manager error");
        }
        let code = err.code();
        CommandError::new(code, err.to_string())
    }
}

impl From<FloorError> for ManagerError {
    fn from(err: FloorError) -> Self {
        match err {
            FloorError::ReservationNotFound(id) => ManagerError::ReservationNotFound(id),
            FloorError::DuplicateReservation(id) => ManagerError::DuplicateReservation(id),
            FloorError::TableOccupied(msg) => ManagerError::TableOccupied(msg),
            FloorError::InvalidInput(msg) => ManagerError::InvalidInput(msg),
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
