use serde::{Deserialize, Serialize};

/// Visual tone of a status badge. Drives the colour of every enum badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Primary,
    Secondary,
    Warning,
    Danger,
    Muted,
}

impl Tone {
    /// CSS classes for a badge of this tone
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Success => "bg-success/10 text-success border-success/20",
            Tone::Primary => "bg-primary/10 text-primary border-primary/20",
            Tone::Secondary => "bg-secondary/10 text-secondary border-secondary/20",
            Tone::Warning => "bg-warning/10 text-warning border-warning/20",
            Tone::Danger => "bg-danger/10 text-danger border-danger/20",
            Tone::Muted => "bg-muted/10 text-muted-foreground border-muted/20",
        }
    }
}
