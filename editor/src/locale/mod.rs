use crate::consts::DEFAULT_LANGUAGE;
use crate::misc::EditorError;
use crate::viewport_tools::tool::ToolType;

use serde::Deserialize;

const EN: &str = include_str!("en.json");
const FR: &str = include_str!("fr.json");

/// Human readable tool titles for one language.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleBundle {
	pub name: String,
	tools: ToolTitles,
}

#[derive(Debug, Clone, Deserialize)]
struct ToolTitles {
	select: String,
	line: String,
	angle: String,
}

impl LocaleBundle {
	pub fn tool_title(&self, tool_type: ToolType) -> &str {
		match tool_type {
			ToolType::Select => &self.tools.select,
			ToolType::Line => &self.tools.line,
			ToolType::Angle => &self.tools.angle,
		}
	}
}

/// Parses the bundled translations for `language`. Languages the editor does
/// not ship fall back to English.
pub fn bundle_for(language: &str) -> Result<LocaleBundle, EditorError> {
	let source = match language {
		"en" => EN,
		"fr" => FR,
		_ => {
			log::warn!("Missing translation ({}); the editor falls back to '{}'", language, DEFAULT_LANGUAGE);
			EN
		}
	};
	Ok(serde_json::from_str(source)?)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn bundled_translations_parse() {
		let bundle = bundle_for("en").unwrap();
		assert_eq!(bundle.name, "English");
		assert_eq!(bundle.tool_title(ToolType::Line), "Line");

		let bundle = bundle_for("fr").unwrap();
		assert_eq!(bundle.tool_title(ToolType::Select), "Sélection");
	}

	#[test]
	fn unknown_languages_fall_back_to_english() {
		let bundle = bundle_for("eo").unwrap();
		assert_eq!(bundle.name, "English");
	}

	#[test]
	fn malformed_bundles_become_locale_errors() {
		let error = EditorError::from(serde_json::from_str::<LocaleBundle>("{}").unwrap_err());
		assert!(matches!(error, EditorError::Locale(_)));
	}
}
