#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use csf_mods_lib::core::mod_manager::ModManager;
use csf_mods_lib::models::paths::{GamePathRules, CONFIG_FILES};
use std::fs;
use tempfile::TempDir;

pub const ORIGINAL_EXE: &str = "original exe";
pub const WIDESCREEN_EXE: &str = "widescreen exe";

pub const ORIGINAL_CAMERA_CFG: &str = "\
; Configuracion de la vista
.CameraFOV        1.0
.ExtCamDistance   12.5
.ExtCamHeight     3
.ExtCamPitch      -15.0
.ExtCamYaw        45
.ExtCamOffset     (0.5, 1.0, -2.0)
.Brillo           0.8
";

pub fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap()
}

pub fn original_content(name: &str) -> String {
    if name == "JuegoVer.cfg" {
        ORIGINAL_CAMERA_CFG.to_string()
    } else {
        format!("; original {name}\n.Valor 1\n")
    }
}

/// Builds a fake install: live files differ from the stashed originals so
/// a reset is observable.
pub fn setup_test_env() -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let home = utf8_root(&tmp);
    let rules = GamePathRules::new(&home);

    fs::create_dir_all(&rules.config).unwrap();
    fs::create_dir_all(&rules.orig).unwrap();
    fs::create_dir_all(&rules.wsfix).unwrap();

    for name in CONFIG_FILES {
        fs::write(rules.orig.join(name), original_content(name)).unwrap();
        fs::write(rules.config.join(name), format!("; tampered {name}\n")).unwrap();
    }

    fs::write(rules.orig.join("CommXPC.exe"), ORIGINAL_EXE).unwrap();
    fs::write(rules.wsfix.join("CommXPC.exe"), WIDESCREEN_EXE).unwrap();
    fs::write(&rules.exe, "some other exe").unwrap();

    (tmp, home)
}

pub fn manager(home: &Utf8Path) -> ModManager {
    let mut manager = ModManager::new(home, None);
    manager.load_state();
    manager
}

pub fn read(path: &Utf8Path) -> String {
    fs::read_to_string(path).unwrap()
}
