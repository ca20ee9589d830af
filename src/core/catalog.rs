use crate::models::mod_dto::{ConfigPatch, ModId, ModPlan, SwapPair};
use crate::models::paths::{GamePathRules, CONFIG_FILES};

/// Config file holding the camera options both mods touch.
pub const CAMERA_CONFIG: &str = "JuegoVer.cfg";

pub const WIDESCREEN_FOV: (&str, &str) = ("CameraFOV", "1.3");

pub const NO_EXT_VIEW_CAMERA: [(&str, &str); 5] = [
    ("ExtCamDistance", "0.0"),
    ("ExtCamHeight", "0.0"),
    ("ExtCamPitch", "0.0"),
    ("ExtCamYaw", "0.0"),
    ("ExtCamOffset", "(0.0 0.0 0.0)"),
];

fn owned(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

impl ModId {
    pub const ALL: [ModId; 3] = [ModId::Original, ModId::WidescreenFix, ModId::NoExternalView];

    /// The file operations that bring this mod into effect. Paths stay
    /// relative so the caller decides which home they resolve against.
    pub fn plan(self, rules: &GamePathRules) -> ModPlan {
        match self {
            ModId::Original => ModPlan {
                swaps: original_pairs(rules),
                patches: Vec::new(),
            },
            ModId::WidescreenFix => ModPlan {
                swaps: vec![SwapPair {
                    stash: rules.wsfix.join(rules.exe_name()),
                    live: rules.exe.clone(),
                }],
                patches: vec![ConfigPatch {
                    target: rules.config_file(CAMERA_CONFIG),
                    options: owned(&[WIDESCREEN_FOV]),
                }],
            },
            ModId::NoExternalView => ModPlan {
                swaps: Vec::new(),
                patches: vec![ConfigPatch {
                    target: rules.config_file(CAMERA_CONFIG),
                    options: owned(&NO_EXT_VIEW_CAMERA),
                }],
            },
        }
    }
}

/// Every config file followed by the executable, stashed under `orig/`.
fn original_pairs(rules: &GamePathRules) -> Vec<SwapPair> {
    CONFIG_FILES
        .iter()
        .map(|name| SwapPair {
            stash: rules.orig.join(name),
            live: rules.config_file(name),
        })
        .chain(std::iter::once(SwapPair {
            stash: rules.orig.join(rules.exe_name()),
            live: rules.exe.clone(),
        }))
        .collect()
}
