//! Theme preference DTO, schema version 1.0.0.

use kbchat_core::error::{KbChatError, Result};
use kbchat_core::theme::Theme;
use serde::{Deserialize, Serialize};

/// Current theme preference schema version.
pub const THEME_SCHEMA_VERSION: &str = "1.0.0";

/// Root document of the theme preference namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeDocV1 {
    pub schema_version: String,
    pub theme: Theme,
}

impl ThemeDocV1 {
    pub fn from_domain(theme: Theme) -> Self {
        Self {
            schema_version: THEME_SCHEMA_VERSION.to_string(),
            theme,
        }
    }

    pub fn into_domain(self) -> Result<Theme> {
        if self.schema_version != THEME_SCHEMA_VERSION {
            return Err(KbChatError::Storage(format!(
                "unsupported theme schema version '{}'",
                self.schema_version
            )));
        }
        Ok(self.theme)
    }
}
