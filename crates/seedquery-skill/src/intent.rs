//! Routing table of the intents the skill accepts.

use std::fmt;

use crate::error::DispatchError;

/// Every intent name the dispatcher routes, with its fixed slot contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    /// Count of objects of a type (`ObjectType`), answered by the SEED server.
    Count,
    /// Facts about a genome (`TaxonId` + `Version`), answered by the SEED server.
    Genome,
    /// Explanation of a term (`Term`), answered from the glossary.
    Text,
    Help,
    Cancel,
    Stop,
}

impl IntentKind {
    pub const ALL: [IntentKind; 6] = [
        IntentKind::Count,
        IntentKind::Genome,
        IntentKind::Text,
        IntentKind::Help,
        IntentKind::Cancel,
        IntentKind::Stop,
    ];

    /// Intent name as sent by the voice platform.
    pub fn name(self) -> &'static str {
        match self {
            IntentKind::Count => "CountIntent",
            IntentKind::Genome => "GenomeIntent",
            IntentKind::Text => "TextIntent",
            IntentKind::Help => "AMAZON.HelpIntent",
            IntentKind::Cancel => "AMAZON.CancelIntent",
            IntentKind::Stop => "AMAZON.StopIntent",
        }
    }

    /// Slots that must carry a non-blank value before the intent is acted on.
    pub fn required_slots(self) -> &'static [&'static str] {
        match self {
            IntentKind::Count => &["ObjectType"],
            IntentKind::Genome => &["TaxonId", "Version"],
            IntentKind::Text => &["Term"],
            IntentKind::Help | IntentKind::Cancel | IntentKind::Stop => &[],
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for IntentKind {
    type Err = DispatchError;

    /// Exact, case-sensitive match on the platform intent name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntentKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DispatchError::UnrecognizedIntent(s.to_string()))
    }
}
