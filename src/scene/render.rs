use std::io::Write;

use crate::{
    foundation::error::{GgmError, GgmResult},
    scene::model::SceneScript,
};

/// Playback seam between scene scripts and an animation engine.
///
/// The crate never rasterizes frames; a renderer consumes a validated script
/// and does whatever its engine does with it (typeset, draw, encode). The
/// implementations shipped here only validate and export.
pub trait SceneRenderer {
    /// Consume one scene script.
    fn render(&mut self, script: &SceneScript) -> GgmResult<()>;
}

/// Renderer that validates the script and discards it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl SceneRenderer for NullRenderer {
    fn render(&mut self, script: &SceneScript) -> GgmResult<()> {
        script.validate()
    }
}

/// Renderer that writes the validated script as pretty-printed JSON.
#[derive(Debug)]
pub struct JsonDump<W: Write> {
    writer: W,
}

impl<W: Write> JsonDump<W> {
    /// Dump into any writer (a file, stdout, a buffer).
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SceneRenderer for JsonDump<W> {
    fn render(&mut self, script: &SceneScript) -> GgmResult<()> {
        script.validate()?;
        let json = serde_json::to_string_pretty(script)
            .map_err(|e| GgmError::serde(format!("encode scene '{}': {e}", script.name)))?;
        self.writer
            .write_all(json.as_bytes())
            .and_then(|()| self.writer.write_all(b"\n"))
            .map_err(|e| GgmError::Other(anyhow::Error::new(e)))
    }
}
