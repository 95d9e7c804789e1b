//! Named width breakpoints and the threshold type accepted by the dispatcher.
//!
//! The table follows the Tailwind CSS defaults:
//!
//! | name  | width        |
//! |-------|--------------|
//! | `xs`  | < 640px      |
//! | `sm`  | 640px        |
//! | `md`  | 768px        |
//! | `lg`  | 1024px       |
//! | `xl`  | 1280px       |
//! | `2xl` | 1536px       |
//!
//! Thresholds are compared inclusively (`width <= threshold`), so `xs`
//! resolves to 639: the widest viewport that is still below `sm`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub const fn px(self) -> u32 {
        match self {
            Breakpoint::Xs => 639,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Largest breakpoint the given width reaches. Widths below `sm` are `xs`.
    pub fn for_width(width: u32) -> Breakpoint {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| *bp != Breakpoint::Xs && width >= bp.px())
            .unwrap_or(Breakpoint::Xs)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|bp| bp.name() == name)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown breakpoint '{s}'")))
    }
}

/// Width limit for [`execute_by_width`](super::ViewportDispatcher::execute_by_width):
/// a named breakpoint or a raw pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    Named(Breakpoint),
    Pixels(u32),
}

impl Threshold {
    pub const fn px(self) -> u32 {
        match self {
            Threshold::Named(bp) => bp.px(),
            Threshold::Pixels(px) => px,
        }
    }
}

impl From<Breakpoint> for Threshold {
    fn from(bp: Breakpoint) -> Self {
        Threshold::Named(bp)
    }
}

impl From<u32> for Threshold {
    fn from(px: u32) -> Self {
        Threshold::Pixels(px)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Named(bp) => write!(f, "{} ({}px)", bp, bp.px()),
            Threshold::Pixels(px) => write!(f, "{px}px"),
        }
    }
}
