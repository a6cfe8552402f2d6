//! Print options selected during the details step.

use serde::{Deserialize, Serialize};

/// Upper bound the order form accepts for the copy count.
pub const MAX_COPIES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Monochrome,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sided {
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    A4,
    A3,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    None,
    Staple,
    Spiral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintOptions {
    pub copies: u32,
    pub color: ColorMode,
    pub sided: Sided,
    pub page_size: PageSize,
    pub binding: Binding,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            copies: 1,
            color: ColorMode::Monochrome,
            sided: Sided::Single,
            page_size: PageSize::A4,
            binding: Binding::None,
        }
    }
}

impl PrintOptions {
    /// The order form bounds copies to `1..=MAX_COPIES`.
    pub fn copies_in_range(&self) -> bool {
        (1..=MAX_COPIES).contains(&self.copies)
    }
}
