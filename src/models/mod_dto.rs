use camino::Utf8PathBuf;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ModId {
    #[display("original config")]
    Original,
    #[display("widescreen-fix")]
    WidescreenFix,
    #[display("no-ext-view")]
    NoExternalView,
}

/// Whether a swap keeps the source in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwapMode {
    #[default]
    Copy,
    Move,
}

/// A backup location and the live location it restores, both relative to home.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapPair {
    pub stash: Utf8PathBuf,
    pub live: Utf8PathBuf,
}

/// Option name to replacement payload, in the order they are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigPatch {
    pub target: Utf8PathBuf,
    pub options: Vec<(String, String)>,
}

/// Everything needed to bring one mod into effect.
#[derive(Clone, Debug, Default)]
pub struct ModPlan {
    pub swaps: Vec<SwapPair>,
    pub patches: Vec<ConfigPatch>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ApplyOutcome {
    #[display("Restored original config!")]
    Original,
    #[display("Widescreen fix active!")]
    Widescreen,
    #[display("No-external-view active!")]
    NoExternalView,
    #[display("Widescreen fix and No-external-view active!")]
    Both,
}

impl ApplyOutcome {
    pub fn from_flags(wsfix: bool, no_ext_view: bool) -> Self {
        match (wsfix, no_ext_view) {
            (true, true) => ApplyOutcome::Both,
            (true, false) => ApplyOutcome::Widescreen,
            (false, true) => ApplyOutcome::NoExternalView,
            (false, false) => ApplyOutcome::Original,
        }
    }
}
