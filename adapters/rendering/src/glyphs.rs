//! Character set used to draw mazes.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

/// Characters the canvas draws with.
///
/// Every field falls back to its default when omitted from a configuration
/// file, so a file only needs to list the glyphs it changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Glyphs {
    /// Drawn for open maze cells.
    pub open: char,
    /// Drawn for blocked maze cells.
    pub blocked: char,
    /// Drawn over cells on the solution path.
    pub path: char,
    /// Drawn along the top and bottom border.
    pub horizontal_wall: char,
    /// Drawn along the left and right border, including the corners.
    pub vertical_wall: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            open: '.',
            blocked: '#',
            path: '+',
            horizontal_wall: '-',
            vertical_wall: '|',
        }
    }
}

impl Glyphs {
    /// Loads and validates a glyph configuration from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read glyph configuration at {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid glyph configuration in {}", path.display()))
    }

    /// Parses and validates a glyph configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let glyphs: Self =
            toml::from_str(contents).context("failed to parse glyph configuration toml")?;
        glyphs.validate()?;
        Ok(glyphs)
    }

    /// Checks that every glyph is visible and that no two glyphs collide.
    pub fn validate(&self) -> Result<(), GlyphError> {
        let named = self.named();

        for (name, glyph) in named {
            if glyph.is_control() || glyph.is_whitespace() {
                return Err(GlyphError::Invisible { name, glyph });
            }
        }

        for (index, (first, glyph)) in named.iter().enumerate() {
            if let Some((second, _)) = named[index + 1..]
                .iter()
                .find(|(_, other)| other == glyph)
            {
                return Err(GlyphError::Collision {
                    first: *first,
                    second: *second,
                    glyph: *glyph,
                });
            }
        }

        Ok(())
    }

    fn named(&self) -> [(&'static str, char); 5] {
        [
            ("open", self.open),
            ("blocked", self.blocked),
            ("path", self.path),
            ("horizontal_wall", self.horizontal_wall),
            ("vertical_wall", self.vertical_wall),
        ]
    }
}

/// Reasons a glyph configuration is rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    /// The glyph would not show up on a terminal.
    #[error("glyph `{name}` must be a visible character (received {glyph:?})")]
    Invisible {
        /// Configuration key of the glyph.
        name: &'static str,
        /// Offending character.
        glyph: char,
    },
    /// Two glyphs use the same character.
    #[error("glyphs `{first}` and `{second}` both use {glyph:?}")]
    Collision {
        /// Configuration key of the first glyph.
        first: &'static str,
        /// Configuration key of the second glyph.
        second: &'static str,
        /// Shared character.
        glyph: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_pass_validation() {
        assert_eq!(Glyphs::default().validate(), Ok(()));
    }

    #[test]
    fn partial_configuration_keeps_remaining_defaults() {
        let glyphs = Glyphs::from_toml_str(
            r#"
            path = "*"
            blocked = "@"
        "#,
        )
        .expect("partial configuration parses");

        assert_eq!(glyphs.path, '*');
        assert_eq!(glyphs.blocked, '@');
        assert_eq!(glyphs.open, Glyphs::default().open);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Glyphs::from_toml_str(r#"exit = ">""#);
        assert!(result.is_err(), "unknown keys must be rejected");
    }

    #[test]
    fn multi_character_glyphs_are_rejected() {
        let result = Glyphs::from_toml_str(r#"open = "..""#);
        assert!(result.is_err(), "glyphs hold exactly one character");
    }

    #[test]
    fn colliding_glyphs_are_rejected() {
        let glyphs = Glyphs {
            path: '.',
            ..Glyphs::default()
        };

        assert_eq!(
            glyphs.validate(),
            Err(GlyphError::Collision {
                first: "open",
                second: "path",
                glyph: '.',
            })
        );
    }

    #[test]
    fn blank_glyphs_are_rejected() {
        let glyphs = Glyphs {
            blocked: ' ',
            ..Glyphs::default()
        };

        assert_eq!(
            glyphs.validate(),
            Err(GlyphError::Invisible {
                name: "blocked",
                glyph: ' ',
            })
        );
    }

    #[test]
    fn from_path_reads_configuration_files() {
        let mut file = tempfile::NamedTempFile::new().expect("temporary file");
        writeln!(file, "open = \"o\"").expect("write configuration");

        let glyphs = Glyphs::from_path(file.path()).expect("configuration loads");

        assert_eq!(glyphs.open, 'o');
    }

    #[test]
    fn from_path_reports_missing_files() {
        let error = Glyphs::from_path("does/not/exist.toml").expect_err("missing file");
        assert!(error.to_string().contains("does/not/exist.toml"));
    }
}
