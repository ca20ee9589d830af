use camino::{Utf8Path, Utf8PathBuf};

/// Suffix appended to a path to form its conventional backup location.
pub const BACKUP_SUFFIX: &str = ".bak";

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

define_paths!(GamePathRules {
    exe: "CommXPC.exe",
    config: "config",
    orig: "modsmgr/orig",
    wsfix: "modsmgr/wsfix",
    state: "modsmgr/resources/env.dat",
});

/// Every file the game reads from `config/`.
pub const CONFIG_FILES: [&str; 9] = [
    "Control.cfg",
    "Editor.cfg",
    "Juego.cfg",
    "JuegoPla.cfg",
    "JuegoVer.cfg",
    "MultiP.cfg",
    "Punteria.cfg",
    "Red.cfg",
    "Sonidos.cfg",
];

impl GamePathRules {
    pub fn config_file(&self, name: &str) -> Utf8PathBuf {
        self.config.join(name)
    }

    pub fn exe_name(&self) -> &str {
        self.exe.file_name().unwrap_or("CommXPC.exe")
    }
}

/// `path` with the backup suffix appended to its final component.
pub fn backup_path(path: &Utf8Path) -> Utf8PathBuf {
    let mut raw = path.as_str().trim_end_matches(['/', '\\']).to_string();
    raw.push_str(BACKUP_SUFFIX);
    Utf8PathBuf::from(raw)
}
