use std::fmt;

use log::{error, info};

use crate::error::BookError;

/// Reports a controller operation moving through its stages.
pub fn update(operation: Operation, stage: Stage) {
    match stage {
        Stage::Failed(err) => error!("{}: {}: {:#?}", operation, stage, err),
        other => info!("{}: {}", operation, other),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Refresh,
    Delete(i64),
    Lookup(i64),
}

pub enum Stage<'a> {
    Validating,
    Submitting,
    Succeeded,
    Failed(&'a BookError),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add"),
            Self::Update => write!(f, "Update"),
            Self::Refresh => write!(f, "Refresh"),
            Self::Delete(id) => write!(f, "Delete {}", id),
            Self::Lookup(id) => write!(f, "Lookup {}", id),
        }
    }
}

impl<'a> fmt::Display for Stage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = match self {
            Self::Validating => "Validating",
            Self::Submitting => "Submitting",
            Self::Succeeded => "Succeeded",
            Self::Failed(_) => "Fail",
        };

        f.write_str(r)
    }
}
