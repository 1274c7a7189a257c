//! Tone selection — maps the applicant's chosen tone to writing instructions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Register of the generated cover letter and email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    #[serde(alias = "professional")]
    Professional,
    #[serde(alias = "warm")]
    Warm,
    #[serde(alias = "concise")]
    Concise,
}

impl Tone {
    /// Style instruction injected into both generation prompts.
    pub fn instructions(self) -> &'static str {
        match self {
            Tone::Professional => {
                "Use formal, business-appropriate language. Be respectful and traditional in approach."
            }
            Tone::Warm => {
                "Use friendly but professional language. Show enthusiasm and personality \
                 while maintaining professionalism."
            }
            Tone::Concise => {
                "Be direct and to-the-point. Use shorter sentences and get straight to the \
                 value proposition."
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Warm => "Warm",
            Tone::Concise => "Concise",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
