use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use kil_core::enums::{CharacterTrait, SpellCategory};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let category: SpellCategory = parse_enum("charm", "category").expect("category should parse");
        assert_eq!(category, SpellCategory::Charm);
    }

    #[test]
    fn parses_hyphenated_and_spaced_aliases() {
        let category: SpellCategory =
            parse_enum("counter-spell", "category").expect("category should parse");
        assert_eq!(category, SpellCategory::CounterSpell);

        let character_trait: CharacterTrait =
            parse_enum("Highly Intelligent", "trait").expect("trait should parse");
        assert_eq!(character_trait, CharacterTrait::HighlyIntelligent);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<SpellCategory>("disarming", "category").expect_err("should fail");
        assert!(err.to_string().contains("invalid category 'disarming'"));
    }
}
