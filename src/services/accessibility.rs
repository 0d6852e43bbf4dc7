//! Screen-reader descriptions of a pattern.

use crate::i18n::Language;
use crate::models::{PatternAccessibilityInfo, PatternMode, PatternState};
use crate::services::pattern_generator::layer_for;

/// Builds alt text and descriptions for a pattern in the given language.
pub fn describe_pattern(state: &PatternState, language: Language) -> PatternAccessibilityInfo {
    let sequence = state.sequence();
    let count = sequence.len();

    if count == 0 {
        let (alt, description) = match language {
            Language::En => ("Empty pattern", "The canvas is empty."),
            Language::Fr => ("Motif vide", "Le canevas est vide."),
        };
        return PatternAccessibilityInfo {
            alt_text: alt.to_string(),
            description: description.to_string(),
            sequence_description: String::new(),
            spatial_description: String::new(),
        };
    }

    let center = &sequence[count - 1];
    let size = state.pattern_size();

    let alt_text = match (state.pattern_mode(), language) {
        (PatternMode::Concentric, Language::En) => {
            format!("Concentric emoji pattern with {count} rings centered on {center}")
        }
        (PatternMode::Concentric, Language::Fr) => {
            format!("Motif concentrique de {count} anneaux centré sur {center}")
        }
        (PatternMode::Sequential, Language::En) => {
            format!("Sequential emoji pattern with {count} emojis")
        }
        (PatternMode::Sequential, Language::Fr) => {
            format!("Motif séquentiel de {count} emojis")
        }
    };

    let description = match language {
        Language::En => format!("A {size} by {size} grid containing {count} emojis."),
        Language::Fr => format!("Une grille de {size} sur {size} contenant {count} emojis."),
    };

    let joined = sequence.join(", ");
    let sequence_description = match language {
        Language::En => format!("Sequence in the order added: {joined}"),
        Language::Fr => format!("Séquence dans l'ordre d'ajout : {joined}"),
    };

    // Centre first, then rings outwards
    let rings: Vec<String> = sequence
        .iter()
        .enumerate()
        .rev()
        .map(|(index, emoji)| match (layer_for(index, count), language) {
            (0, Language::En) => format!("center {emoji}"),
            (0, Language::Fr) => format!("centre {emoji}"),
            (layer, Language::En) => format!("ring {layer} {emoji}"),
            (layer, Language::Fr) => format!("anneau {layer} {emoji}"),
        })
        .collect();
    let spatial_description = format!("{}.", rings.join(", "));

    PatternAccessibilityInfo {
        alt_text,
        description,
        sequence_description,
        spatial_description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pattern_generator::create_pattern_state;

    #[test]
    fn test_describe_empty_pattern() {
        let state = create_pattern_state(Vec::<String>::new(), PatternMode::Concentric);
        let info = describe_pattern(&state, Language::En);
        assert_eq!(info.alt_text, "Empty pattern");
        assert!(info.spatial_description.is_empty());
    }

    #[test]
    fn test_describe_concentric_pattern() {
        let state = create_pattern_state(["😀", "😎"], PatternMode::Concentric);
        let info = describe_pattern(&state, Language::En);

        assert_eq!(
            info.alt_text,
            "Concentric emoji pattern with 2 rings centered on 😎"
        );
        assert_eq!(info.description, "A 3 by 3 grid containing 2 emojis.");
        assert_eq!(info.sequence_description, "Sequence in the order added: 😀, 😎");
        assert_eq!(info.spatial_description, "center 😎, ring 1 😀.");
    }

    #[test]
    fn test_describe_in_french() {
        let state = create_pattern_state(["🌸"], PatternMode::Concentric);
        let info = describe_pattern(&state, Language::Fr);
        assert!(info.alt_text.starts_with("Motif concentrique"));
        assert_eq!(info.spatial_description, "centre 🌸.");
    }
}
