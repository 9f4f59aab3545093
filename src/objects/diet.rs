use super::MealKey;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DietResponse {
    pub status: String,
    pub message: String,
    pub data: DietData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DietData {
    pub diets: Diets,
}

/// Everything a successful fetch publishes. Replaced as a whole, never field by field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diets {
    pub diet_streak: Vec<String>,
    pub all_diets: Vec<DietPlan>,
}

/// One daytime section of the plan, e.g. "Morning".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub daytime: String,
    pub timings: String,
    pub progress_status: ProgressStatus,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ProgressStatus {
    pub total: i64,
    pub completed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Complete,
    Partial,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub time_slot: String,
    pub duration: i64,
    pub image: String,
    pub is_favorite: i64,
    pub is_completed: i64,
}

impl DietResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_diets(self) -> Diets {
        self.data.diets
    }
}

impl DietPlan {
    pub fn title(&self) -> String {
        format!("{} Meals", self.daytime)
    }

    pub fn meal_key(&self, recipe: &Recipe) -> MealKey {
        MealKey::new(&self.daytime, recipe.id)
    }

    pub fn meal_keys(&self) -> impl Iterator<Item = MealKey> + '_ {
        self.recipes.iter().map(move |recipe| self.meal_key(recipe))
    }
}

impl ProgressStatus {
    /// Share of completed meals in `0.0..=1.0`; an empty section counts as `0.0`.
    pub fn fraction(&self) -> f64 {
        match self.total {
            total if total <= 0 => 0.0,
            total => (self.completed.max(0) as f64 / total as f64).min(1.0),
        }
    }

    pub fn status(&self) -> SectionStatus {
        if self.total > 0 && self.completed >= self.total {
            SectionStatus::Complete
        } else if self.completed > 0 {
            SectionStatus::Partial
        } else {
            SectionStatus::Pending
        }
    }
}

impl Recipe {
    pub fn is_favorite(&self) -> bool {
        self.is_favorite == 1
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "status": "success",
        "message": "Diets fetched",
        "data": {
            "diets": {
                "dietStreak": ["Mon", "Tue"],
                "allDiets": [
                    {
                        "daytime": "Morning",
                        "timings": "7:00 AM - 9:00 AM",
                        "progressStatus": {"total": 2, "completed": 1},
                        "recipes": [
                            {"id": 1, "title": "Oats", "timeSlot": "7:00 AM", "duration": 10,
                             "image": "https://img/oats.png", "isFavorite": 0, "isCompleted": 1},
                            {"id": 2, "title": "Banana", "timeSlot": "8:30 AM", "duration": 2,
                             "image": "https://img/banana.png", "isFavorite": 1, "isCompleted": 0}
                        ]
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn decodes_full_payload() {
        let diets = DietResponse::from_json(PAYLOAD).unwrap().into_diets();

        assert_eq!(diets.diet_streak, vec!["Mon", "Tue"]);
        assert_eq!(diets.all_diets.len(), 1);

        let morning = &diets.all_diets[0];
        assert_eq!(morning.title(), "Morning Meals");
        assert_eq!(morning.progress_status, ProgressStatus { total: 2, completed: 1 });
        assert_eq!(morning.recipes[1].time_slot, "8:30 AM");
        assert!(morning.recipes[0].is_completed());
        assert!(!morning.recipes[0].is_favorite());
        assert!(morning.recipes[1].is_favorite());
    }

    #[test]
    fn missing_progress_status_is_a_decode_error() {
        let json = r#"{"status": "ok", "message": "", "data": {"diets": {"dietStreak": [],
            "allDiets": [{"daytime": "Morning", "timings": "", "recipes": []}]}}}"#;
        let err = DietResponse::from_json(json).unwrap_err();

        assert!(err.to_string().contains("progressStatus"));
    }

    #[test]
    fn meal_keys_follow_recipe_order() {
        let diets = DietResponse::from_json(PAYLOAD).unwrap().into_diets();
        let keys: Vec<MealKey> = diets.all_diets[0].meal_keys().collect();

        assert_eq!(keys, vec![MealKey::new("Morning", 1), MealKey::new("Morning", 2)]);
    }

    #[test]
    fn flags_other_than_one_are_false() {
        let mut recipe = DietResponse::from_json(PAYLOAD).unwrap().into_diets().all_diets[0].recipes[0].clone();
        recipe.is_completed = 2;

        assert!(!recipe.is_completed());
    }

    #[test]
    fn negative_and_wide_integers_decode() {
        let json = PAYLOAD
            .replace(r#""duration": 10"#, r#""duration": -5"#)
            .replace(r#""isFavorite": 1"#, r#""isFavorite": 4294967296"#);
        let diets = DietResponse::from_json(&json).unwrap().into_diets();
        let recipes = &diets.all_diets[0].recipes;

        assert_eq!(recipes[0].duration, -5);
        assert_eq!(recipes[1].is_favorite, 4_294_967_296);
        assert!(!recipes[1].is_favorite());
    }

    #[test]
    fn negative_progress_counts_are_pending() {
        let negative = ProgressStatus { total: -3, completed: -1 };
        assert_eq!(negative.fraction(), 0.0);
        assert_eq!(negative.status(), SectionStatus::Pending);

        let no_progress = ProgressStatus { total: 4, completed: -2 };
        assert_eq!(no_progress.fraction(), 0.0);
        assert_eq!(no_progress.status(), SectionStatus::Pending);
    }

    #[test]
    fn progress_fraction_and_status() {
        let empty = ProgressStatus { total: 0, completed: 0 };
        assert_eq!(empty.fraction(), 0.0);
        assert_eq!(empty.status(), SectionStatus::Pending);

        let half = ProgressStatus { total: 4, completed: 2 };
        assert_eq!(half.fraction(), 0.5);
        assert_eq!(half.status(), SectionStatus::Partial);

        let over = ProgressStatus { total: 2, completed: 3 };
        assert_eq!(over.fraction(), 1.0);
        assert_eq!(over.status(), SectionStatus::Complete);
    }
}
