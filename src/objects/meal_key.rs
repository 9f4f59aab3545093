use std::fmt::Display;

/// Identifies one meal card: the section it sits in plus the recipe id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MealKey {
    pub daytime: String,
    pub recipe_id: i64,
}

impl MealKey {
    pub fn new(daytime: &str, recipe_id: i64) -> Self {
        Self {
            daytime: String::from(daytime),
            recipe_id,
        }
    }
}

impl Display for MealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.daytime, self.recipe_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_with_ambiguous_text_stay_distinct() {
        let a = MealKey::new("Morning", -1);
        let b = MealKey::new("Morning-", 1);

        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);
    }
}
