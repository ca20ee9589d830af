use crate::models::error::SError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which mods are currently in effect on disk.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivationState {
    pub cfg_orig: bool,
    pub mod_wsfix: bool,
    pub mod_noextv: bool,
}

impl Default for ActivationState {
    fn default() -> Self {
        Self {
            cfg_orig: true,
            mod_wsfix: false,
            mod_noextv: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum StateKey {
    #[display("cfg_orig")]
    CfgOrig,
    #[display("mod_wsfix")]
    ModWsfix,
    #[display("mod_noextv")]
    ModNoextv,
}

impl StateKey {
    pub const ALL: [StateKey; 3] = [StateKey::CfgOrig, StateKey::ModWsfix, StateKey::ModNoextv];
}

impl FromStr for StateKey {
    type Err = SError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cfg_orig" => Ok(StateKey::CfgOrig),
            "mod_wsfix" => Ok(StateKey::ModWsfix),
            "mod_noextv" => Ok(StateKey::ModNoextv),
            other => Err(SError::UnknownKey(other.to_string())),
        }
    }
}

impl ActivationState {
    pub fn get(&self, key: StateKey) -> bool {
        match key {
            StateKey::CfgOrig => self.cfg_orig,
            StateKey::ModWsfix => self.mod_wsfix,
            StateKey::ModNoextv => self.mod_noextv,
        }
    }

    pub fn set(&mut self, key: StateKey, value: bool) {
        match key {
            StateKey::CfgOrig => self.cfg_orig = value,
            StateKey::ModWsfix => self.mod_wsfix = value,
            StateKey::ModNoextv => self.mod_noextv = value,
        }
    }

    pub fn enable(&mut self, key: StateKey) {
        self.set(key, true);
    }

    pub fn disable(&mut self, key: StateKey) {
        self.set(key, false);
    }
}
