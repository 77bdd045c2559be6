//! Record shapes shown in the grid.
//!
//! The view controller only sees a record through [`Record`]: an identifier
//! and a mutable status. Everything else is payload for the rendering layer.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::{Label, PaymentStatus, Priority, StatusValue, TaskStatus};
use crate::ids::RecordId;

/// A row the view controller can page, select, and bulk-edit.
pub trait Record {
    /// Closed status set for this record shape.
    type Status: StatusValue;

    fn id(&self) -> &RecordId;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);
}

/// A payment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: RecordId,
    pub email: String,
    pub status: PaymentStatus,
    /// Whole currency units.
    pub amount: u32,
}

impl Record for Payment {
    type Status = PaymentStatus;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> PaymentStatus {
        self.status
    }

    fn set_status(&mut self, status: PaymentStatus) {
        self.status = status;
    }
}

/// A task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub label: Label,
    pub estimated_hours: f64,
    pub created_at: NaiveDateTime,
}

impl Record for Task {
    type Status = TaskStatus;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
