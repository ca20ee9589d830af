use std::process::ExitCode;

fn main() -> ExitCode {
    csf_mods_lib::run()
}
