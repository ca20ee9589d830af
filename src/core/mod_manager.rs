use camino::{Utf8Path, Utf8PathBuf};
use std::process::Child;
use sysinfo::System;
use tracing::{error, info, instrument, warn};

use crate::core::{config_patch, launcher, mod_backup};
use crate::models::error::SError;
use crate::models::mod_dto::{ApplyOutcome, ModId, SwapMode};
use crate::models::paths::GamePathRules;
use crate::models::state::{ActivationState, StateKey};
use crate::utils::process::ProcessChecker;

/// Result of reading the persisted state at startup.
#[derive(Debug)]
pub enum StateLoad {
    Restored(ActivationState),
    /// The record could not be read; defaults are in effect.
    Defaulted(SError),
}

/// Owns the activation state and drives every mod switch for one install.
pub struct ModManager {
    pub home: Utf8PathBuf,
    pub rules: GamePathRules,
    state_file: Utf8PathBuf,
    state: ActivationState,
}

impl ModManager {
    /// `state_file` is resolved against `home` when relative.
    pub fn new(home: impl Into<Utf8PathBuf>, state_file: Option<&Utf8Path>) -> Self {
        let home = home.into();
        let rules = GamePathRules::default();
        let state_file = home.join(state_file.unwrap_or(&rules.state));
        Self {
            home,
            rules,
            state_file,
            state: ActivationState::default(),
        }
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn state_file(&self) -> &Utf8Path {
        &self.state_file
    }

    #[instrument(skip(self), fields(path = %self.state_file))]
    pub fn load_state(&mut self) -> StateLoad {
        match ActivationState::load(&self.state_file) {
            Ok(state) => {
                self.state = state;
                StateLoad::Restored(state)
            }
            Err(e) => {
                warn!("falling back to default state: {e}");
                self.state = ActivationState::default();
                StateLoad::Defaulted(e)
            }
        }
    }

    /// True when the recorded mods differ from the requested combination.
    pub fn needs_apply(&self, wsfix: bool, no_ext_view: bool) -> bool {
        let wanted = ActivationState {
            cfg_orig: !wsfix && !no_ext_view,
            mod_wsfix: wsfix,
            mod_noextv: no_ext_view,
        };
        wanted != self.state
    }

    /// Resets to the original files, layers the requested mods on top and
    /// persists the new state. Stops at the first failing stage; earlier
    /// stages are not rolled back and the state file is only written once
    /// every stage succeeded.
    #[instrument(skip(self))]
    pub fn apply(&mut self, wsfix: bool, no_ext_view: bool) -> Result<ApplyOutcome, SError> {
        self.ensure_game_stopped()?;

        self.apply_mod(ModId::Original)?;
        self.state.enable(StateKey::CfgOrig);
        self.state.disable(StateKey::ModWsfix);
        self.state.disable(StateKey::ModNoextv);

        if wsfix {
            self.apply_mod(ModId::WidescreenFix)?;
            self.state.disable(StateKey::CfgOrig);
            self.state.enable(StateKey::ModWsfix);
        }

        if no_ext_view {
            self.apply_mod(ModId::NoExternalView)?;
            self.state.disable(StateKey::CfgOrig);
            self.state.enable(StateKey::ModNoextv);
        }

        self.state.save(&self.state_file).map_err(|e| {
            error!("config applied but state was not saved: {e}");
            SError::StateNotSaved(Box::new(e))
        })?;

        let outcome = ApplyOutcome::from_flags(wsfix, no_ext_view);
        info!(%outcome, "mods applied");
        Ok(outcome)
    }

    fn apply_mod(&self, id: ModId) -> Result<(), SError> {
        info!(mod_id = ?id, "applying");
        let plan = id.plan(&self.rules);

        let run = || -> Result<(), SError> {
            for pair in &plan.swaps {
                mod_backup::recover(&self.home, &pair.live, Some(&pair.stash), SwapMode::Copy)?;
            }
            for patch in &plan.patches {
                config_patch::patch_options(&self.home.join(&patch.target), &patch.options)?;
            }
            Ok(())
        };

        run().map_err(|e| {
            error!(mod_id = ?id, "stage failed: {e}");
            SError::ModFailed(id, Box::new(e))
        })
    }

    /// Copies the live config files and executable into the `Original`
    /// stash, replacing whatever was stashed before.
    #[instrument(skip(self))]
    pub fn snapshot_original(&self) -> Result<usize, SError> {
        self.ensure_game_stopped()?;

        let pairs = ModId::Original.plan(&self.rules).swaps;
        for pair in &pairs {
            mod_backup::backup(&self.home, &pair.live, Some(&pair.stash), SwapMode::Copy)?;
        }
        info!(count = pairs.len(), "original files stashed");
        Ok(pairs.len())
    }

    pub fn run_game(&self) -> Result<Child, SError> {
        launcher::run_game(&self.home, &self.rules.exe)
    }

    fn ensure_game_stopped(&self) -> Result<(), SError> {
        let exe = self.home.join(&self.rules.exe);
        let mut sys = System::new();
        if ProcessChecker::is_running(&mut sys, &[exe.as_path()]) {
            return Err(SError::GameRunning);
        }
        Ok(())
    }
}
