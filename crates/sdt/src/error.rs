//! Construction-time failures for content controls.
//!
//! All three kinds are raised synchronously while a control is being built;
//! materializing an already-built control never fails.

use crate::kind::ControlKind;
use thiserror::Error;

/// The three-way taxonomy of construction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlErrorKind {
    Configuration,
    NestingViolation,
    Format,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// A required field is missing, empty, or out of range.
    #[error("Configuration error in {control} ('{field}'): {message}")]
    Configuration {
        control: ControlKind,
        field: &'static str,
        message: String,
    },

    /// A structural legality rule is broken.
    #[error("Nesting violation in {control}: {message}")]
    NestingViolation {
        control: ControlKind,
        child: ControlKind,
        message: String,
    },

    /// A cross-reference key or data-binding locator is malformed.
    #[error("Format error in {control} ('{field}'): {message}")]
    Format {
        control: ControlKind,
        field: &'static str,
        message: String,
    },
}

impl ControlError {
    pub fn configuration(control: ControlKind, field: &'static str, message: impl Into<String>) -> Self {
        ControlError::Configuration {
            control,
            field,
            message: message.into(),
        }
    }

    pub fn format(control: ControlKind, field: &'static str, message: impl Into<String>) -> Self {
        ControlError::Format {
            control,
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ControlErrorKind {
        match self {
            ControlError::Configuration { .. } => ControlErrorKind::Configuration,
            ControlError::NestingViolation { .. } => ControlErrorKind::NestingViolation,
            ControlError::Format { .. } => ControlErrorKind::Format,
        }
    }

    /// The control that was being constructed when the error was raised.
    pub fn control(&self) -> ControlKind {
        match self {
            ControlError::Configuration { control, .. }
            | ControlError::NestingViolation { control, .. }
            | ControlError::Format { control, .. } => *control,
        }
    }
}
