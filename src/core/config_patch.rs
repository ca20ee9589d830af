use camino::Utf8Path;
use regex::bytes::{Captures, Regex};
use std::fs;
use tracing::{debug, info};

use crate::models::error::SError;

const NUMBER: &str = r"[-+]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)";

/// Matches a whole payload: a number or a parenthesized triple of numbers.
fn payload_pattern() -> String {
    format!(r"(?:{NUMBER}|\([ \t]*{NUMBER}(?:[ \t]*,?[ \t]*{NUMBER}){{2}}[ \t]*\))")
}

fn option_regex(name: &str) -> Result<Regex, SError> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(SError::ParseError(format!("invalid option name '{name}'")));
    }
    // Group 1 keeps the indentation, the `.name` token and the separator.
    // Group 2 is the byte ending the payload, so `1.0e2` or `75abc` never match.
    let pattern = format!(
        r"(?m-u)^([ \t]*\.{name}[ \t]+){}([ \t;\r]|$)",
        payload_pattern()
    );
    Regex::new(&pattern).map_err(|e| SError::ParseError(e.to_string()))
}

fn value_regex() -> Result<Regex, SError> {
    Regex::new(&format!(r"(?-u)^{}$", payload_pattern()))
        .map_err(|e| SError::ParseError(e.to_string()))
}

fn validate_value(whole: &Regex, name: &str, value: &str) -> Result<(), SError> {
    if whole.is_match(value.as_bytes()) {
        Ok(())
    } else {
        Err(SError::ParseError(format!("'{value}' is not a valid value for .{name}")))
    }
}

/// Rewrites the payload of every `.name <payload>` line for each option.
/// Returns the new text and the names that matched at least one line.
pub fn patch_text(
    text: &[u8],
    options: &[(String, String)],
) -> Result<(Vec<u8>, Vec<String>), SError> {
    let mut out = text.to_vec();
    let mut matched = Vec::new();
    let whole = value_regex()?;

    for (name, value) in options {
        validate_value(&whole, name, value)?;
        let re = option_regex(name)?;
        if !re.is_match(&out) {
            debug!(option = %name, "option not present, skipping");
            continue;
        }

        out = re
            .replace_all(&out, |caps: &Captures| {
                let mut line = caps[1].to_vec();
                line.extend_from_slice(value.as_bytes());
                line.extend_from_slice(caps.get(2).map_or(&[][..], |m| m.as_bytes()));
                line
            })
            .into_owned();
        matched.push(name.clone());
    }

    Ok((out, matched))
}

/// Patches the config file at `path` in place.
/// Options that the file does not contain are ignored.
pub fn patch_options(path: &Utf8Path, options: &[(String, String)]) -> Result<Vec<String>, SError> {
    if !path.is_file() {
        return Err(SError::NotFound(format!("config file {path}")));
    }

    let text = fs::read(path)?;
    let (patched, matched) = patch_text(&text, options)?;
    fs::write(path, patched)?;

    info!(%path, ?matched, "patched config options");
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn patch(text: &str, pairs: &[(&str, &str)]) -> String {
        let (out, _) = patch_text(text.as_bytes(), &opts(pairs)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_replaces_scalar_payload_only() {
        let text = "; camera\n.CameraFOV   1.0\n.Other 2\n";
        assert_eq!(
            patch(text, &[("CameraFOV", "1.3")]),
            "; camera\n.CameraFOV   1.3\n.Other 2\n"
        );
    }

    #[test]
    fn test_replaces_signed_and_bare_decimals() {
        assert_eq!(patch(".Pitch -12.5\n", &[("Pitch", "0.0")]), ".Pitch 0.0\n");
        assert_eq!(patch(".Pitch +.5\n", &[("Pitch", "0")]), ".Pitch 0\n");
        assert_eq!(patch(".Pitch 7.\n", &[("Pitch", "-1")]), ".Pitch -1\n");
    }

    #[test]
    fn test_replaces_vector_triple() {
        let text = "\t.ExtCamOffset\t(1.5, -2, 3.25)\n";
        assert_eq!(
            patch(text, &[("ExtCamOffset", "(0.0 0.0 0.0)")]),
            "\t.ExtCamOffset\t(0.0 0.0 0.0)\n"
        );
        assert_eq!(
            patch(".V ( 1 2 3 )\n", &[("V", "(4,5,6)")]),
            ".V (4,5,6)\n"
        );
    }

    #[test]
    fn test_keeps_trailing_text_on_line() {
        assert_eq!(
            patch(".Zoom 4.0 ; default zoom\r\n", &[("Zoom", "2.0")]),
            ".Zoom 2.0 ; default zoom\r\n"
        );
    }

    #[test]
    fn test_name_must_match_whole_token() {
        let text = ".CameraFOVMax 9.0\n.MyCameraFOV 9.0\n";
        let (out, matched) = patch_text(text.as_bytes(), &opts(&[("CameraFOV", "1.3")])).unwrap();
        assert_eq!(out, text.as_bytes());
        assert!(matched.is_empty());
    }

    #[test]
    fn test_does_not_match_across_lines() {
        let text = ".CameraFOV\n1.0\n";
        assert_eq!(patch(text, &[("CameraFOV", "1.3")]), text);
    }

    #[test]
    fn test_non_numeric_payload_is_left_alone() {
        let text = ".Name \"Green Devil\"\n";
        assert_eq!(patch(text, &[("Name", "1")]), text);
    }

    #[test]
    fn test_payload_must_end_at_a_boundary() {
        let text = ".FOV 1.0e2\n.FOV 75abc\n.FOV (1 2 3)x\n";
        let (out, matched) = patch_text(text.as_bytes(), &opts(&[("FOV", "1.3")])).unwrap();
        assert_eq!(out, text.as_bytes());
        assert!(matched.is_empty());

        assert_eq!(patch(".FOV 2;note\n", &[("FOV", "1.3")]), ".FOV 1.3;note\n");
        assert_eq!(patch(".FOV 2\t\r\n", &[("FOV", "1.3")]), ".FOV 1.3\t\r\n");
        assert_eq!(patch(".FOV 2", &[("FOV", "1.3")]), ".FOV 1.3");
    }

    #[test]
    fn test_every_matching_line_is_rewritten() {
        let text = ".Speed 1\n[section]\n.Speed 2\n";
        assert_eq!(patch(text, &[("Speed", "5")]), ".Speed 5\n[section]\n.Speed 5\n");
    }

    #[test]
    fn test_is_idempotent() {
        let text = ".A 1\n.B (1 2 3)\n";
        let options = opts(&[("A", "-0.5"), ("B", "(0.0, 0.0, 0.0)")]);
        let (once, _) = patch_text(text.as_bytes(), &options).unwrap();
        let (twice, _) = patch_text(&once, &options).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_preserves_non_utf8_bytes() {
        let mut text = b"; Configuraci\xf3n\n.Volumen 10\n".to_vec();
        text.extend_from_slice(b"; \xe1ngulo\n");
        let (out, matched) = patch_text(&text, &opts(&[("Volumen", "3")])).unwrap();
        assert_eq!(matched, vec!["Volumen".to_string()]);
        assert_eq!(out, b"; Configuraci\xf3n\n.Volumen 3\n; \xe1ngulo\n".to_vec());
    }

    #[test]
    fn test_rejects_bad_values_and_names() {
        assert!(matches!(
            patch_text(b".A 1\n", &opts(&[("A", "wide")])),
            Err(SError::ParseError(_))
        ));
        assert!(matches!(
            patch_text(b".A 1\n", &opts(&[("A.*", "1")])),
            Err(SError::ParseError(_))
        ));
    }
}
