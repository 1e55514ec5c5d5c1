use super::FunnelLayout;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::io::{Read, Write};

impl FunnelLayout {
    /// Encodes the layout with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| ArtifactError::Serialization(e.to_string()))
    }

    /// Decodes a layout previously produced by [`FunnelLayout::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(layout, _)| layout)
            .map_err(|e| ArtifactError::Deserialization(e.to_string()))
    }

    /// Pretty-printed JSON, the usual hand-off format for web renderers.
    pub fn to_json(&self) -> Result<String, ArtifactError> {
        serde_json::to_string_pretty(self).map_err(|e| ArtifactError::Serialization(e.to_string()))
    }

    /// Saves the layout to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not create file: {}", e),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not write file: {}", e),
        })?;
        Ok(())
    }

    /// Loads a layout saved with [`FunnelLayout::save`].
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not open file: {}", e),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not read file: {}", e),
        })?;
        Self::from_bytes(&bytes)
    }
}
