// File: src/mode.rs
// Purpose: When the form runs validation for a field

use serde::{Deserialize, Serialize};

/// Trigger strategy before the first submit attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Only on submit
    #[default]
    OnSubmit,
    /// When a field loses focus
    OnBlur,
    /// On every change
    OnChange,
    /// On the first blur, then on every change of that field
    OnTouched,
    /// On blur and on change
    All,
}

/// Trigger strategy once the form has been submitted at least once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevalidateMode {
    #[default]
    OnChange,
    OnBlur,
    OnSubmit,
}

impl Mode {
    /// Should a change event validate the field?
    pub fn validates_on_change(self, touched: bool) -> bool {
        match self {
            Mode::OnChange | Mode::All => true,
            Mode::OnTouched => touched,
            Mode::OnSubmit | Mode::OnBlur => false,
        }
    }

    /// Should a blur event validate the field?
    pub fn validates_on_blur(self) -> bool {
        matches!(self, Mode::OnBlur | Mode::OnTouched | Mode::All)
    }
}

impl RevalidateMode {
    pub fn validates_on_change(self) -> bool {
        self == RevalidateMode::OnChange
    }

    pub fn validates_on_blur(self) -> bool {
        self == RevalidateMode::OnBlur
    }
}
