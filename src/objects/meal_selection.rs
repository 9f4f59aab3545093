use super::{DietPlan, MealKey};
use std::collections::HashSet;

/// Meal cards the user has checked. Purely local, never sent anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealSelection {
    selected: HashSet<MealKey>,
}

impl MealSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, key: MealKey) {
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
    }

    pub fn is_selected(&self, key: &MealKey) -> bool {
        self.selected.contains(key)
    }

    /// Selects every meal of the section unless all of them already are, in
    /// which case they are all cleared. A partial selection therefore goes to
    /// fully selected first.
    pub fn toggle_all(&mut self, plan: &DietPlan) {
        if self.is_section_fully_selected(plan) {
            for key in plan.meal_keys() {
                self.selected.remove(&key);
            }
        } else {
            self.selected.extend(plan.meal_keys());
        }
    }

    /// True when every meal of the section is selected; vacuously true for an empty section.
    pub fn is_section_fully_selected(&self, plan: &DietPlan) -> bool {
        plan.meal_keys().all(|key| self.selected.contains(&key))
    }

    /// Drops keys that no longer name a meal in `plans`.
    pub fn retain_known(&mut self, plans: &[DietPlan]) {
        let known: HashSet<MealKey> = plans.iter().flat_map(|plan| plan.meal_keys()).collect();

        self.selected.retain(|key| known.contains(key));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{ProgressStatus, Recipe};

    fn plan(daytime: &str, ids: &[i64]) -> DietPlan {
        DietPlan {
            daytime: daytime.into(),
            timings: "7:00 AM - 9:00 AM".into(),
            progress_status: ProgressStatus {
                total: ids.len() as i64,
                completed: 0,
            },
            recipes: ids
                .iter()
                .map(|&id| Recipe {
                    id,
                    title: format!("Recipe {}", id),
                    time_slot: "7:00 AM".into(),
                    duration: 5,
                    image: String::new(),
                    is_favorite: 0,
                    is_completed: 0,
                })
                .collect(),
        }
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut selection = MealSelection::new();
        selection.toggle(MealKey::new("Morning", 1));
        let before = selection.clone();

        selection.toggle(MealKey::new("Morning", 2));
        selection.toggle(MealKey::new("Morning", 2));
        assert_eq!(selection, before);

        selection.toggle(MealKey::new("Morning", 1));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_from_nothing_and_back() {
        let morning = plan("Morning", &[1, 2, 3]);
        let mut selection = MealSelection::new();

        selection.toggle_all(&morning);
        assert!(selection.is_section_fully_selected(&morning));
        assert_eq!(selection.len(), 3);

        selection.toggle_all(&morning);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_from_partial_fills_then_clears() {
        let morning = plan("Morning", &[1, 2, 3]);
        let mut selection = MealSelection::new();
        selection.toggle(MealKey::new("Morning", 2));

        selection.toggle_all(&morning);
        assert!(selection.is_section_fully_selected(&morning));

        selection.toggle_all(&morning);
        assert!(!selection.is_selected(&MealKey::new("Morning", 2)));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_leaves_other_sections_alone() {
        let morning = plan("Morning", &[1, 2]);
        let evening = plan("Evening", &[1]);
        let mut selection = MealSelection::new();
        selection.toggle(MealKey::new("Evening", 1));

        selection.toggle_all(&morning);
        selection.toggle_all(&morning);

        assert!(selection.is_section_fully_selected(&evening));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn fully_selected_means_subset() {
        let morning = plan("Morning", &[1, 2]);
        let mut selection = MealSelection::new();
        assert!(!selection.is_section_fully_selected(&morning));

        selection.toggle(MealKey::new("Morning", 1));
        assert!(!selection.is_section_fully_selected(&morning));

        selection.toggle(MealKey::new("Morning", 2));
        selection.toggle(MealKey::new("Night", 9));
        assert!(selection.is_section_fully_selected(&morning));

        assert!(selection.is_section_fully_selected(&plan("Afternoon", &[])));
    }

    #[test]
    fn retain_known_drops_stale_keys() {
        let mut selection = MealSelection::new();
        selection.toggle(MealKey::new("Morning", 1));
        selection.toggle(MealKey::new("Morning", 7));
        selection.toggle(MealKey::new("Brunch", 1));

        selection.retain_known(&[plan("Morning", &[1, 2])]);

        assert_eq!(selection.len(), 1);
        assert!(selection.is_selected(&MealKey::new("Morning", 1)));
    }
}
