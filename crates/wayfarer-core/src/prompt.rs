//! The fixed travel-guide prompt and the sections it asks for.

use serde::{Deserialize, Serialize};

/// Instruction sent with every image. Not user-editable.
pub const TRAVEL_GUIDE_PROMPT: &str = "\
You are an expert travel guide. Analyze the image and provide the following information:
1. A detailed description of the tourist place.
2. Suggest 3 popular accommodations near this place, including their approximate price range.
3. Recommend 3 cultural foods to try in this area, including where to find them.";

/// One of the sections the prompt requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideSection {
    Description,
    Accommodation,
    Food,
}

impl GuideSection {
    pub const ALL: [GuideSection; 3] = [
        GuideSection::Description,
        GuideSection::Accommodation,
        GuideSection::Food,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            GuideSection::Description => &["description", "describe", "overview", "about"],
            GuideSection::Accommodation => &["accommodation", "hotel", "hostel", "stay", "lodging"],
            GuideSection::Food => &["food", "dish", "cuisine", "eat", "restaurant"],
        }
    }
}

/// Sections of the guide that appear to be present in a model response.
///
/// A loose keyword check: the model's output format is not fixed, so this only
/// tells whether the response looks like it addressed each request.
pub fn sections_present(text: &str) -> Vec<GuideSection> {
    let lower = text.to_lowercase();
    GuideSection::ALL
        .into_iter()
        .filter(|section| section.keywords().iter().any(|k| lower.contains(k)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_asks_for_all_sections() {
        assert_eq!(sections_present(TRAVEL_GUIDE_PROMPT), GuideSection::ALL.to_vec());
    }

    #[test]
    fn test_sections_present_partial() {
        let text = "## Overview\nThe Taj Mahal is...\n## Where to eat\nTry the local biryani.";
        assert_eq!(
            sections_present(text),
            vec![GuideSection::Description, GuideSection::Food]
        );
    }

    #[test]
    fn test_sections_present_none() {
        assert!(sections_present("I cannot identify this place.").is_empty());
    }

    #[test]
    fn test_section_serializes_lowercase() {
        let json = serde_json::to_string(&GuideSection::Accommodation).unwrap();
        assert_eq!(json, "\"accommodation\"");
    }
}
