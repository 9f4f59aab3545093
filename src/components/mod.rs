mod diet_plan_view;
mod icon;
mod meal_card;
mod streak_card;
mod top;

pub use diet_plan_view::DietPlanView;
pub use icon::{Icon, IconStyle};
pub use meal_card::MealCard;
pub use streak_card::StreakCard;
pub use top::Top;
