use super::{DietPlanView, Icon};
use yew::prelude::*;

pub struct Top;

impl Component for Top {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container px-4 py-4">
                <nav class="level is-mobile">
                    <div class="level-left"><h1 class="level-item title">{"Everyday Diet Plan"}</h1></div>
                    <div class="level-right"><button class="level-item button is-white"><Icon name="shopping_cart" /></button></div>
                </nav>
                <p class="subtitle is-6 has-text-grey">{"Track every meal"}</p>
                <DietPlanView />
            </div>
        }
    }
}
